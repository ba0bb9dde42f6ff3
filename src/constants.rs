// DOM-facing constants for the web front-end.

// Third-party scheduling widget (booking page)
pub const BOOKING_SCRIPT_SRC: &str = "https://assets.calendly.com/assets/external/widget.js";
pub const BOOKING_WIDGET_URL: &str = "https://calendly.com/foonclinic/30min";

// Services slideshow track
pub const SLIDE_TRANSITION_CSS: &str = "transform 500ms ease-in-out";
pub const SLIDE_CARD_CLASS: &str = "service-card";
pub const SLIDE_POPULAR_CLASS: &str = "popular";
pub const DOT_ACTIVE_CLASS: &str = "active";

// Events the particle background listens to
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_POINTER_LEAVE: &str = "pointerleave";
pub const EV_CLICK: &str = "click";
pub const EV_RESIZE: &str = "resize";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = "[data-reveal], [data-reveal-stagger]";
pub const ATTR_REVEAL: &str = "data-reveal";
pub const ATTR_REVEAL_STAGGER: &str = "data-reveal-stagger";
pub const ATTR_REVEAL_DELAY: &str = "data-reveal-delay";
pub const ATTR_REVEAL_REPEAT: &str = "data-reveal-repeat"; // on the root: re-hide when scrolled out
pub const REVEAL_HIDDEN_CLASS: &str = "opacity-0";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
