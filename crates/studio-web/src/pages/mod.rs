//! Page Components

mod docs;

pub use docs::DocsPage;
