mod sidebar;
mod site_header;
mod spinner;
mod toast;

pub use sidebar::Sidebar;
pub use site_header::SiteHeader;
pub use spinner::Spinner;
pub use toast::{ToastContainer, use_toasts};
