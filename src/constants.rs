// DOM ids, CSS classes and map styling used by the web front-end.

// Panels
pub const MAP_CONTAINER_ID: &str = "map";
pub const LOCATION_INFO_ID: &str = "location-info";
pub const COORDINATES_ID: &str = "coordinates";
pub const ADDRESS_ID: &str = "address";
pub const CURRENT_SOUND_ID: &str = "current-sound";
pub const AUDIO_INDICATOR_ID: &str = "audio-indicator";

// Pet card
pub const PET_STATUS_ID: &str = "dog-status";
pub const PET_IMAGE_ID: &str = "dog-image";
pub const PET_PLACEHOLDER_ID: &str = "dog-placeholder";

// Buttons
pub const LOCATE_BUTTON_ID: &str = "locate-btn";
pub const SIMULATE_BUTTON_ID: &str = "simulate-btn";
pub const RANDOM_SOUND_BUTTON_ID: &str = "random-sound-btn";
pub const STOP_SOUND_BUTTON_ID: &str = "stop-sound-btn";
pub const PET_BUTTON_ID: &str = "dog-btn";

// Classes toggled on status elements
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_LOADING: &str = "loading";
pub const CLASS_PLAYING: &str = "playing";
pub const CLASS_FADE_IN: &str = "fade-in";

// Display values for the pet card
pub const DISPLAY_IMAGE: &str = "block";
pub const DISPLAY_PLACEHOLDER: &str = "flex";
pub const DISPLAY_HIDDEN: &str = "none";

// Marker: 12px green dot with a white ring inside a 16x16 icon box
pub const MARKER_ICON_HTML: &str = "<div style=\"background: #10b981; width: 12px; height: 12px; border-radius: 50%; border: 2px solid white; box-shadow: 0 0 4px rgba(0,0,0,0.3);\"></div>";
pub const MARKER_ICON_SIZE_PX: [u32; 2] = [16, 16];
