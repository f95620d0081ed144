mod vision;

// EXPORTS
pub use vision::{Detection, RemoteVision, VisionService};
