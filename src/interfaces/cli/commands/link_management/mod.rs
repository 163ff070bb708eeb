//! Link management commands

mod add;
mod helpers;
mod list;
mod resolve;
mod show;
mod toggle;
mod update;

pub use add::add_link;
pub use helpers::read_payload;
pub use list::list_links;
pub use resolve::{RequestOverrides, build_context, resolve_link};
pub use show::show_link;
pub use toggle::toggle_link;
pub use update::update_link;
