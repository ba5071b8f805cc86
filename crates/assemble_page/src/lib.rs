// crates/assemble_page/src/lib.rs

//! Page assembly: one template function shared by the per-section pages and
//! the landing page.

mod landing;
mod section_page;
pub mod template;

pub use landing::{landing_body, landing_page, render_landing, LANDING_STYLE};
pub use section_page::{compose_section_body, render_section_page, section_page, section_resources};
pub use template::{render_page, RenderedPage};
