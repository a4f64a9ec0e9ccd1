// Units, defaults and naming shared by the core and its front-ends.

// Scene units are meters; the input fields are millimeters.
pub const MM_PER_METER: f32 = 1000.0;

// Fallbacks for empty or unparseable input fields (millimeters)
pub const DEFAULT_WIDTH_MM: f32 = 1000.0;
pub const DEFAULT_HEIGHT_MM: f32 = 80.0;

// Name given to the group that owns every clone
pub const CONTAINER_NAME: &str = "ModelContainer";

// Tolerance used when comparing scene-space lengths
pub const LENGTH_EPSILON: f32 = 1e-5;
