//! Scene colors and fonts

pub const CLOUD: &str = "rgba(255,255,255,0.85)";
pub const GROUND: &str = "rgba(17,24,39,0.9)";

pub const OBSTACLE_GROUND: &str = "#10b981";
pub const OBSTACLE_OVERHEAD: &str = "#ef4444";

pub const PENGUIN_BODY: &str = "#0f172a";
pub const PENGUIN_BELLY: &str = "#e5e7eb";
pub const PENGUIN_DARK: &str = "#111827";
pub const PENGUIN_ORANGE: &str = "#f59e0b";

pub const OVERLAY: &str = "rgba(0,0,0,0.75)";
pub const OVERLAY_TEXT: &str = "white";
pub const OVERLAY_FONT: &str = "bold 24px system-ui";
