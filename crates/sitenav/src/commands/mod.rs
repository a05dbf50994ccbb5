//! CLI command implementations.

mod sidebar;
mod site;
mod toc;
mod tree;

pub(crate) use sidebar::SidebarArgs;
pub(crate) use toc::TocArgs;
pub(crate) use tree::TreeArgs;
