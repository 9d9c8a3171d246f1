pub mod node;
pub mod project;
pub mod status;

pub use node::{Edge, Node, NodeKind};
pub use project::{
    CreateProjectRequest, Language, ModelProvider, Project, ProjectStats, UpdateProjectRequest,
};
pub use status::RunStatus;
