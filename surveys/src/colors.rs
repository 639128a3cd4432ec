use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::SurveyAppearance;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppearanceError {
    #[error("Invalid color value for {field}. Please use a valid CSS color.")]
    InvalidColor { field: String },
}

// Hex digits with no leading hash, in the short or long form.
static BARE_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9A-Fa-f]{3}){1,2}$").expect("static regex is valid"));

static HASH_HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .expect("static regex is valid")
});

// Body must be numeric arguments (with % / decimals), not arbitrary text.
static COLOR_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(?:rgb|rgba|hsl|hsla)\(\s*\d+(?:\.\d+)?%?(?:\s*,\s*\d+(?:\.\d+)?%?){2,3}\s*\)$")
        .expect("static regex is valid")
});

/// CSS extended color keywords, plus the transparent and currentcolor values.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue",
    "tan", "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat",
    "white", "whitesmoke", "yellow", "yellowgreen",
];

fn is_valid_color(color: &str) -> bool {
    HASH_HEX.is_match(color)
        || COLOR_FUNCTION.is_match(color)
        || NAMED_COLORS.contains(&color.to_lowercase().as_str())
}

/// Normalizes a stored color value: hex digits missing their leading `#` get
/// one, everything else passes through untouched. Idempotent.
pub fn sanitize_color(color: Option<&str>) -> Option<String> {
    let color = color.filter(|c| !c.is_empty())?;
    if BARE_HEX.is_match(color) {
        Some(format!("#{color}"))
    } else {
        Some(color.to_string())
    }
}

/// Checks a color value against the CSS color forms the widget can render.
/// Returns a user-facing message on failure, `None` when the value is absent
/// or acceptable.
pub fn validate_color(color: Option<&str>, field_name: &str) -> Option<String> {
    let color = color.filter(|c| !c.is_empty())?;
    if is_valid_color(color) {
        None
    } else {
        Some(
            AppearanceError::InvalidColor {
                field: field_name.to_string(),
            }
            .to_string(),
        )
    }
}

/// Shallow copy of the appearance with every color field sanitized.
pub fn sanitize_survey_appearance(appearance: Option<&SurveyAppearance>) -> Option<SurveyAppearance> {
    let appearance = appearance?;
    Some(SurveyAppearance {
        background_color: sanitize_color(appearance.background_color.as_deref()),
        border_color: sanitize_color(appearance.border_color.as_deref()),
        submit_button_color: sanitize_color(appearance.submit_button_color.as_deref()),
        submit_button_text_color: sanitize_color(appearance.submit_button_text_color.as_deref()),
        rating_button_color: sanitize_color(appearance.rating_button_color.as_deref()),
        rating_button_active_color: sanitize_color(appearance.rating_button_active_color.as_deref()),
        position: appearance.position.clone(),
        white_label: appearance.white_label,
    })
}

/// Validates every color field, collecting the per-field messages. An empty
/// vec means the appearance is clean.
pub fn validate_survey_appearance(appearance: &SurveyAppearance) -> Vec<String> {
    let checks = [
        (appearance.background_color.as_deref(), "background color"),
        (appearance.border_color.as_deref(), "border color"),
        (appearance.submit_button_color.as_deref(), "submit button color"),
        (
            appearance.submit_button_text_color.as_deref(),
            "submit button text color",
        ),
        (appearance.rating_button_color.as_deref(), "rating button color"),
        (
            appearance.rating_button_active_color.as_deref(),
            "rating button active color",
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(color, field_name)| validate_color(color, field_name))
        .collect()
}
