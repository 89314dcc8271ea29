use shared::Severity;

pub struct DiseaseSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub treatment: &'static str,
    pub severity: Severity,
    pub prevention: &'static str,
}

/// Class identifiers match the labels emitted by the plant disease CNN.
pub const PLANT_DISEASES: &[DiseaseSeed] = &[
    DiseaseSeed {
        id: "Apple__Apple_scab",
        name: "Apple Scab",
        description: "A fungal disease that affects apple trees, causing dark, scabby lesions on leaves and fruit.",
        treatment: "Apply fungicides in early spring, remove infected leaves, improve air circulation.",
        severity: Severity::Medium,
        prevention: "Plant resistant varieties, maintain proper spacing, avoid overhead watering.",
    },
    DiseaseSeed {
        id: "Apple_Black_rot",
        name: "Apple Black Rot",
        description: "A fungal disease causing black, sunken lesions on fruit and cankers on branches.",
        treatment: "Remove infected fruit and branches, apply copper fungicides, improve drainage.",
        severity: Severity::High,
        prevention: "Prune regularly, avoid wounding trees, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Apple_Cedar_apple_rust",
        name: "Cedar Apple Rust",
        description: "A fungal disease that requires both apple and cedar trees to complete its life cycle.",
        treatment: "Remove nearby cedar trees, apply fungicides, plant resistant varieties.",
        severity: Severity::Medium,
        prevention: "Plant resistant apple varieties, maintain distance from cedar trees.",
    },
    DiseaseSeed {
        id: "Apple_healthy",
        name: "Healthy Apple",
        description: "The apple tree appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper watering, fertilization, and pruning practices.",
    },
    DiseaseSeed {
        id: "Blueberry_healthy",
        name: "Healthy Blueberry",
        description: "The blueberry plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper soil pH, watering, and fertilization.",
    },
    DiseaseSeed {
        id: "Cherry(including_sour)Powdery_mildew",
        name: "Cherry Powdery Mildew",
        description: "A fungal disease causing white, powdery coating on leaves and fruit.",
        treatment: "Apply fungicides, improve air circulation, remove infected plant parts.",
        severity: Severity::Medium,
        prevention: "Plant resistant varieties, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Cherry(including_sour)healthy",
        name: "Healthy Cherry",
        description: "The cherry tree appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper pruning, watering, and fertilization.",
    },
    DiseaseSeed {
        id: "Corn(maize)Cercospora_leaf_spot Gray_leaf_spot",
        name: "Corn Gray Leaf Spot",
        description: "A fungal disease causing rectangular, tan lesions on corn leaves.",
        treatment: "Apply fungicides, rotate crops, improve drainage.",
        severity: Severity::High,
        prevention: "Use resistant hybrids, rotate crops, till soil properly.",
    },
    DiseaseSeed {
        id: "Corn(maize)Common_rust",
        name: "Corn Common Rust",
        description: "A fungal disease causing orange to brown pustules on corn leaves.",
        treatment: "Apply fungicides, plant resistant hybrids, rotate crops.",
        severity: Severity::Medium,
        prevention: "Use resistant varieties, avoid planting in wet conditions.",
    },
    DiseaseSeed {
        id: "Corn_(maize)Northern_Leaf_Blight",
        name: "Corn Northern Leaf Blight",
        description: "A fungal disease causing long, tan lesions on corn leaves.",
        treatment: "Apply fungicides, remove crop debris, improve drainage.",
        severity: Severity::High,
        prevention: "Plant resistant hybrids, rotate crops, till soil properly.",
    },
    DiseaseSeed {
        id: "Corn(maize)healthy",
        name: "Healthy Corn",
        description: "The corn plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper spacing, watering, and fertilization.",
    },
    DiseaseSeed {
        id: "Grape_Black_rot",
        name: "Grape Black Rot",
        description: "A fungal disease causing black, sunken lesions on grape berries and leaves.",
        treatment: "Apply fungicides, remove infected fruit, improve air circulation.",
        severity: Severity::High,
        prevention: "Plant resistant varieties, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Grape_Esca(Black_Measles)",
        name: "Grape Esca (Black Measles)",
        description: "A fungal disease causing dark spots and cankers on grape vines.",
        treatment: "Prune infected wood, apply fungicides, improve drainage.",
        severity: Severity::High,
        prevention: "Use disease-free planting material, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Grape__Leaf_blight(Isariopsis_Leaf_Spot)",
        name: "Grape Leaf Blight",
        description: "A fungal disease causing brown spots and blight on grape leaves.",
        treatment: "Apply fungicides, remove infected leaves, improve air circulation.",
        severity: Severity::Medium,
        prevention: "Maintain good air circulation, avoid overhead watering.",
    },
    DiseaseSeed {
        id: "Grape__healthy",
        name: "Healthy Grape",
        description: "The grape vine appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper pruning, trellising, and fertilization.",
    },
    DiseaseSeed {
        id: "Orange_Haunglongbing(Citrus_greening)",
        name: "Citrus Greening (Huanglongbing)",
        description: "A bacterial disease causing yellowing of leaves and misshapen fruit.",
        treatment: "Remove infected trees, control psyllid vectors, apply antibiotics.",
        severity: Severity::VeryHigh,
        prevention: "Use disease-free planting material, control psyllid vectors.",
    },
    DiseaseSeed {
        id: "Peach__Bacterial_spot",
        name: "Peach Bacterial Spot",
        description: "A bacterial disease causing dark spots on leaves and fruit.",
        treatment: "Apply copper-based bactericides, remove infected plant parts.",
        severity: Severity::High,
        prevention: "Use disease-free planting material, avoid overhead watering.",
    },
    DiseaseSeed {
        id: "Peach_healthy",
        name: "Healthy Peach",
        description: "The peach tree appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper pruning, watering, and fertilization.",
    },
    DiseaseSeed {
        id: "Pepper,_bell_Bacterial_spot",
        name: "Bell Pepper Bacterial Spot",
        description: "A bacterial disease causing small, dark spots on leaves and fruit.",
        treatment: "Apply copper-based bactericides, remove infected plants.",
        severity: Severity::High,
        prevention: "Use disease-free seeds, avoid overhead watering, rotate crops.",
    },
    DiseaseSeed {
        id: "Pepper,_bell_healthy",
        name: "Healthy Bell Pepper",
        description: "The bell pepper plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper spacing, watering, and fertilization.",
    },
    DiseaseSeed {
        id: "Potato_Early_blight",
        name: "Potato Early Blight",
        description: "A fungal disease causing brown spots with concentric rings on leaves.",
        treatment: "Apply fungicides, remove infected leaves, improve air circulation.",
        severity: Severity::Medium,
        prevention: "Use resistant varieties, avoid overhead watering, rotate crops.",
    },
    DiseaseSeed {
        id: "Potato_Late_blight",
        name: "Potato Late Blight",
        description: "A devastating fungal disease causing water-soaked lesions on leaves and tubers.",
        treatment: "Apply fungicides immediately, remove infected plants, improve drainage.",
        severity: Severity::VeryHigh,
        prevention: "Use resistant varieties, avoid overhead watering, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Potato_healthy",
        name: "Healthy Potato",
        description: "The potato plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper hilling, watering, and fertilization.",
    },
    DiseaseSeed {
        id: "Raspberry_healthy",
        name: "Healthy Raspberry",
        description: "The raspberry plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper pruning, trellising, and fertilization.",
    },
    DiseaseSeed {
        id: "Soybean_healthy",
        name: "Healthy Soybean",
        description: "The soybean plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper spacing, watering, and fertilization.",
    },
    DiseaseSeed {
        id: "Squash_Powdery_mildew",
        name: "Squash Powdery Mildew",
        description: "A fungal disease causing white, powdery coating on leaves.",
        treatment: "Apply fungicides, improve air circulation, remove infected leaves.",
        severity: Severity::Medium,
        prevention: "Plant resistant varieties, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Strawberry_Leaf_scorch",
        name: "Strawberry Leaf Scorch",
        description: "A fungal disease causing brown, scorched appearance on strawberry leaves.",
        treatment: "Apply fungicides, remove infected leaves, improve air circulation.",
        severity: Severity::Medium,
        prevention: "Plant resistant varieties, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Strawberry_healthy",
        name: "Healthy Strawberry",
        description: "The strawberry plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper spacing, mulching, and fertilization.",
    },
    DiseaseSeed {
        id: "Tomato_Bacterial_spot",
        name: "Tomato Bacterial Spot",
        description: "A bacterial disease causing small, dark spots on leaves and fruit.",
        treatment: "Apply copper-based bactericides, remove infected plants, improve air circulation.",
        severity: Severity::High,
        prevention: "Use disease-free seeds, avoid overhead watering, rotate crops.",
    },
    DiseaseSeed {
        id: "Tomato_Early_blight",
        name: "Tomato Early Blight",
        description: "A fungal disease causing brown spots with concentric rings on leaves.",
        treatment: "Apply fungicides, remove infected leaves, improve air circulation.",
        severity: Severity::Medium,
        prevention: "Use resistant varieties, avoid overhead watering, rotate crops.",
    },
    DiseaseSeed {
        id: "Tomato_Late_blight",
        name: "Tomato Late Blight",
        description: "A devastating fungal disease causing water-soaked lesions on leaves and fruit.",
        treatment: "Apply fungicides immediately, remove infected plants, improve drainage.",
        severity: Severity::VeryHigh,
        prevention: "Use resistant varieties, avoid overhead watering, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Tomato_Leaf_Mold",
        name: "Tomato Leaf Mold",
        description: "A fungal disease causing yellow spots and mold on tomato leaves.",
        treatment: "Apply fungicides, improve air circulation, remove infected leaves.",
        severity: Severity::Medium,
        prevention: "Maintain good air circulation, avoid overhead watering.",
    },
    DiseaseSeed {
        id: "Tomato_Septoria_leaf_spot",
        name: "Tomato Septoria Leaf Spot",
        description: "A fungal disease causing small, dark spots with yellow halos on leaves.",
        treatment: "Apply fungicides, remove infected leaves, improve air circulation.",
        severity: Severity::Medium,
        prevention: "Use resistant varieties, avoid overhead watering, rotate crops.",
    },
    DiseaseSeed {
        id: "Tomato_Spider_mites Two-spotted_spider_mite",
        name: "Tomato Spider Mites",
        description: "Pest infestation causing yellowing and webbing on tomato leaves.",
        treatment: "Apply miticides, improve humidity, remove infected leaves.",
        severity: Severity::High,
        prevention: "Maintain proper humidity, use beneficial insects.",
    },
    DiseaseSeed {
        id: "Tomato_Target_Spot",
        name: "Tomato Target Spot",
        description: "A fungal disease causing target-like spots on tomato leaves.",
        treatment: "Apply fungicides, remove infected leaves, improve air circulation.",
        severity: Severity::Medium,
        prevention: "Use resistant varieties, maintain good air circulation.",
    },
    DiseaseSeed {
        id: "Tomato_Tomato_Yellow_Leaf_Curl_Virus",
        name: "Tomato Yellow Leaf Curl Virus",
        description: "A viral disease causing yellowing and curling of tomato leaves.",
        treatment: "Remove infected plants, control whitefly vectors.",
        severity: Severity::VeryHigh,
        prevention: "Use resistant varieties, control whitefly vectors.",
    },
    DiseaseSeed {
        id: "Tomato_Tomato_mosaic_virus",
        name: "Tomato Mosaic Virus",
        description: "A viral disease causing mottled, distorted leaves and fruit.",
        treatment: "Remove infected plants, control aphid vectors.",
        severity: Severity::High,
        prevention: "Use disease-free seeds, control aphid vectors.",
    },
    DiseaseSeed {
        id: "Tomato__healthy",
        name: "Healthy Tomato",
        description: "The tomato plant appears to be healthy with no visible signs of disease.",
        treatment: "Continue current care practices, monitor regularly.",
        severity: Severity::None,
        prevention: "Maintain proper watering, staking, and fertilization.",
    },
];
