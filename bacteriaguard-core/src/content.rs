use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl TopicLevel {
    pub fn label(&self) -> &'static str {
        match self {
            TopicLevel::Beginner => "Beginner",
            TopicLevel::Intermediate => "Intermediate",
            TopicLevel::Advanced => "Advanced",
        }
    }
}

/// Badge colour of a topic card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationTopic {
    pub title: &'static str,
    pub description: &'static str,
    pub level: TopicLevel,
    pub read_time: &'static str,
    pub accent: Accent,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub product: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub headline: &'static str,
    pub highlight: &'static str,
    pub pitch: &'static str,
    pub stats: [HeroStat; 3],
}

static TOPICS: [EducationTopic; 6] = [
    EducationTopic {
        title: "Food Safety Basics",
        description: "Learn fundamental principles of safe food handling and storage",
        level: TopicLevel::Beginner,
        read_time: "5 min",
        accent: Accent::Success,
        body: "Most foodborne illness comes down to four habits: clean, separate, cook and chill. \
Wash hands and surfaces often, keep raw foods away from ready-to-eat foods, cook to safe \
internal temperatures and refrigerate promptly. Store food off the floor, rotate older stock \
to the front and throw out anything past its use-by date.",
    },
    EducationTopic {
        title: "Temperature Control",
        description: "Understanding critical temperatures for bacterial growth prevention",
        level: TopicLevel::Intermediate,
        read_time: "8 min",
        accent: Accent::Warning,
        body: "Bacteria multiply fastest between 5°C and 60°C (40°F to 140°F), the so-called \
danger zone. Keep your refrigerator at or below 4°C and your freezer at -18°C. Hold hot food \
above 60°C, cool leftovers quickly in shallow containers and never leave perishables at room \
temperature for more than two hours, or one hour above 32°C.",
    },
    EducationTopic {
        title: "Recognizing Contamination",
        description: "Visual and sensory signs of bacterial contamination in food",
        level: TopicLevel::Advanced,
        read_time: "12 min",
        accent: Accent::Danger,
        body: "Off odours, slimy textures, discoloration, bulging cans and unexpected fizzing \
are classic warning signs, but many dangerous pathogens such as Salmonella and Listeria \
produce no visible change at all. Treat appearance as a reason to discard food, never as \
proof that it is safe. When in doubt, throw it out.",
    },
    EducationTopic {
        title: "Health Impact",
        description: "How bacterial contamination affects human health and wellbeing",
        level: TopicLevel::Beginner,
        read_time: "6 min",
        accent: Accent::Success,
        body: "Symptoms of food poisoning range from mild stomach upset to severe dehydration \
and can appear within hours or take several days. Young children, older adults, pregnant \
people and anyone with a weakened immune system face the highest risk. Drink fluids, rest, \
and seek medical care for bloody stools, high fever or signs of dehydration.",
    },
    EducationTopic {
        title: "Safe Preparation",
        description: "Best practices for preparing and cooking food safely",
        level: TopicLevel::Intermediate,
        read_time: "10 min",
        accent: Accent::Warning,
        body: "Thaw food in the refrigerator, in cold water or in the microwave, never on the \
counter. Use separate cutting boards for raw meat and produce, and a food thermometer to \
confirm doneness: 74°C for poultry, 71°C for ground meats and 63°C for whole cuts and fish. \
Wash produce under running water just before use.",
    },
    EducationTopic {
        title: "Water Safety",
        description: "Ensuring drinking water is free from harmful bacteria",
        level: TopicLevel::Beginner,
        read_time: "7 min",
        accent: Accent::Success,
        body: "Untreated water can carry E. coli, Campylobacter and other pathogens. When a \
boil-water advisory is in effect, bring water to a rolling boil for at least one minute. \
Clean reusable bottles daily, keep well water tested yearly and use only safe water for ice, \
washing produce and brushing teeth.",
    },
];

static QUICK_TIPS: [&str; 5] = [
    "Wash hands for at least 20 seconds with soap and warm water",
    "Keep raw and cooked foods separate to prevent cross-contamination",
    "Cook food to safe internal temperatures",
    "Refrigerate perishables within 2 hours of preparation",
    "Use separate cutting boards for raw meat and vegetables",
];

static COMMON_SYMPTOMS: [&str; 8] = [
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Stomach cramps",
    "Fever",
    "Headache",
    "Fatigue",
    "Loss of appetite",
];

static REPORT_BENEFITS: [&str; 4] = [
    "Helps identify contamination sources",
    "Protects other consumers",
    "Improves food safety standards",
    "All reports are confidential",
];

/// Side card with a fixed message and an optional button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeCard {
    pub title: &'static str,
    pub body: &'static str,
    pub action: Option<&'static str>,
}

static EMERGENCY: NoticeCard = NoticeCard {
    title: "Emergency",
    body: "If you suspect food poisoning, seek immediate medical attention.",
    action: Some("Emergency Contacts"),
};

static SEEK_MEDICAL_HELP: NoticeCard = NoticeCard {
    title: "Seek Medical Help",
    body: "If symptoms are severe or persistent, seek immediate medical attention.",
    action: Some("Emergency Contacts"),
};

static REPORT_STATUS: NoticeCard = NoticeCard {
    title: "Report Status",
    body: "After submission, you'll receive a confirmation number. \
Health authorities typically respond within 24-48 hours.",
    action: None,
};

static HERO: HeroContent = HeroContent {
    product: "BacteriaGuard",
    subtitle: "Food Safety Detection System",
    badge: "Advanced Food Safety Technology",
    headline: "Detect Bacteria",
    highlight: "Before It's Too Late",
    pitch: "Revolutionary AI-powered bacteria detection system that analyzes food and drinks \
in real-time, protecting your health with laboratory-grade accuracy.",
    stats: [
        HeroStat {
            value: "99.8%",
            label: "Detection Accuracy",
        },
        HeroStat {
            value: "<30s",
            label: "Analysis Time",
        },
        HeroStat {
            value: "50k+",
            label: "Samples Analyzed",
        },
    ],
};

pub fn education_topics() -> &'static [EducationTopic] {
    &TOPICS
}

pub fn quick_tips() -> &'static [&'static str] {
    &QUICK_TIPS
}

pub fn common_symptoms() -> &'static [&'static str] {
    &COMMON_SYMPTOMS
}

pub fn report_benefits() -> &'static [&'static str] {
    &REPORT_BENEFITS
}

/// Shown beside the education topics.
pub fn emergency_notice() -> &'static NoticeCard {
    &EMERGENCY
}

/// Shown beside the report form, above the report status card.
pub fn report_notices() -> [&'static NoticeCard; 2] {
    [&SEEK_MEDICAL_HELP, &REPORT_STATUS]
}

pub fn hero() -> &'static HeroContent {
    &HERO
}
