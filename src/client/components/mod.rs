pub mod admin;
pub mod brand;
pub mod html_editor;
pub mod navbar;
pub mod page;
pub mod spinner;
pub mod toast;

pub use brand::BrandLink;
pub use html_editor::HtmlEditor;
pub use navbar::Navbar;
pub use page::Page;
pub use spinner::Spinner;
pub use toast::Toast;
