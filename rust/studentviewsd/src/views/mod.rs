//! Server-side HTML for the student admin screens. Every render function
//! takes a fully materialised snapshot and returns a complete document.

mod detail;
mod form;
mod html;
mod layout;
mod list;
mod locale;
mod routes;

pub use detail::render_detail;
pub use form::{render_create_form, render_edit_form, FormState};
pub use list::render_list;
pub use locale::Locale;
pub use routes::{ResourceRoutes, Routes};

use locale::Labels;

/// Per-request inputs owned by the surrounding application.
pub struct ViewContext<'a> {
    pub locale: Locale,
    pub routes: &'a dyn Routes,
    pub csrf_token: &'a str,
    /// Replaces the list screen heading when set.
    pub app_title: Option<&'a str>,
}

impl ViewContext<'_> {
    fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    fn or_placeholder(&self, value: Option<&str>) -> String {
        html::escape(value.unwrap_or(self.labels().not_specified))
    }
}
