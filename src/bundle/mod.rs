//! Build material composition, page rendering and the external bundler/publisher seams.

pub mod bundler;
pub mod html;
pub mod pipeline;
pub mod publish;

pub use bundler::{Bundler, CommandBundler};
pub use html::{ScriptTag, render_page};
pub use pipeline::AssetPipeline;
pub use publish::{GitBranchPublisher, PublishTarget};
