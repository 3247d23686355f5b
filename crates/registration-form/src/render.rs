//! HTML rendering of the registrant table and the form page.
//!
//! Field values are user input; every value passes through [`escape_html`]
//! before it is written into markup.

use crate::form::{Field, RegistrationForm, Rejection};
use crate::registry::Registrant;

/// One visible table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub full_name: String,
    pub phone: String,
    pub national_id: String,
    pub email: String,
}

impl From<&Registrant> for TableRow {
    fn from(record: &Registrant) -> Self {
        Self {
            full_name: record.full_name.clone(),
            phone: record.phone.clone(),
            national_id: record.national_id.clone(),
            email: record.email.clone(),
        }
    }
}

impl TableRow {
    pub fn to_html(&self) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&self.full_name),
            escape_html(&self.phone),
            escape_html(&self.national_id),
            escape_html(&self.email),
        )
    }
}

/// Rows shown on the page, in registry order.
#[derive(Debug, Clone, Default)]
pub struct RegistrantTable {
    rows: Vec<TableRow>,
}

impl RegistrantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the row for a registrant and return it.
    pub fn append_row(&mut self, record: &Registrant) -> &TableRow {
        self.rows.push(TableRow::from(record));
        &self.rows[self.rows.len() - 1]
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the `<tbody>` contents.
    pub fn to_html(&self) -> String {
        self.rows.iter().map(TableRow::to_html).collect()
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full registration page.
///
/// After a rejection `form` holds the submitted values and the offending
/// input gets `autofocus`; after a success it is blank.
pub fn render_page(
    table: &RegistrantTable,
    form: &RegistrationForm,
    rejection: Option<&Rejection>,
) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Registro de usuarios</title>\n</head>\n<body>\n<h1>Registro de usuarios</h1>\n",
    );

    if let Some(rejection) = rejection {
        html.push_str(&format!(
            "<div class=\"error\" role=\"alert\">Validation error: {}: {}</div>\n",
            rejection.field.label(),
            escape_html(&rejection.message)
        ));
    }

    html.push_str("<form id=\"registroForm\" method=\"post\" action=\"/\">\n");
    for field in Field::ALL {
        let autofocus = match rejection {
            Some(r) if r.field == field => " autofocus",
            _ => "",
        };
        html.push_str(&format!(
            "<label for=\"{key}\">{label}</label>\
             <input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{value}\"{autofocus}>\n",
            key = field.key(),
            label = field.label(),
            value = escape_html(form.value(field)),
        ));
    }
    html.push_str("<button type=\"submit\">Registrar</button>\n</form>\n");

    html.push_str(
        "<table id=\"tablaRegistros\">\n<thead><tr><th>Full name</th><th>Phone</th>\
         <th>CURP</th><th>Email</th></tr></thead>\n<tbody>",
    );
    html.push_str(&table.to_html());
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");

    html
}
