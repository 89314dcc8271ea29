/// Indexed the same way as the crop recommendation model's output classes.
pub const CROP_LABELS: [&str; 22] = [
    "rice",
    "maize",
    "chickpea",
    "kidneybeans",
    "pigeonpeas",
    "mothbeans",
    "mungbean",
    "blackgram",
    "lentil",
    "pomegranate",
    "banana",
    "mango",
    "grapes",
    "watermelon",
    "muskmelon",
    "apple",
    "orange",
    "papaya",
    "coconut",
    "cotton",
    "jute",
    "coffee",
];

pub const PH_CATEGORIES: [&str; 3] = ["Neutral", "Alkaline", "Acidic"];

pub const RAINFALL_LEVELS: [&str; 4] = ["Very High", "High", "Medium", "Low"];
