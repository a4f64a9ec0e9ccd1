// DOM wiring for the viewer page: element lookups, event names and CSS hooks.
// Kept free of web-sys types so host tests can include this file.

// Elements
pub const VIEWER_SELECTOR: &str = "model-viewer";
pub const WIDTH_INPUT_ID: &str = "width-input";
pub const HEIGHT_INPUT_ID: &str = "height-input";
pub const PROGRESS_BAR_SELECTOR: &str = ".progress-bar";
pub const UPDATE_BAR_SELECTOR: &str = ".update-bar";

// Optional attribute on the viewer naming the template node
pub const TEMPLATE_NAME_ATTR: &str = "data-template-name";

// Class toggled on the progress bar once loading completes
pub const HIDE_CLASS: &str = "hide";

// Events
pub const LOAD_EVENT: &str = "load";
pub const PROGRESS_EVENT: &str = "progress";
pub const INPUT_EVENT: &str = "input";

// Field on the progress event's `detail` carrying completion in [0, 1]
pub const TOTAL_PROGRESS_KEY: &str = "totalProgress";
