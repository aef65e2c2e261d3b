use serde::Serialize;

use super::super::domain::Dosha;
use super::super::scoring::Constitution;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub diet: Vec<&'static str>,
    pub lifestyle: Vec<&'static str>,
    pub exercise: Vec<&'static str>,
    pub herbs: Vec<&'static str>,
}

impl Recommendations {
    /// Sections in display order with their headings.
    pub fn sections(&self) -> [(&'static str, &[&'static str]); 4] {
        [
            ("Dietary Guidelines", self.diet.as_slice()),
            ("Lifestyle Practices", self.lifestyle.as_slice()),
            ("Exercise Recommendations", self.exercise.as_slice()),
            ("Beneficial Herbs", self.herbs.as_slice()),
        ]
    }
}

/// Narrative and recommendations for one primary/secondary pairing.
#[derive(Debug, Clone, Serialize)]
pub struct PairGuidance {
    pub primary: Dosha,
    pub secondary: Dosha,
    pub description: &'static str,
    pub balance_practices: Vec<&'static str>,
    pub recommendations: Recommendations,
}

impl PairGuidance {
    pub fn title(&self) -> String {
        format!(
            "{}-{} Prakriti ({} + {})",
            self.primary.label(),
            self.secondary.label(),
            self.primary.elements(),
            self.secondary.elements()
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DoshaTraits {
    pub physical: Vec<&'static str>,
    pub mental: Vec<&'static str>,
}

pub fn traits_for(dosha: Dosha) -> DoshaTraits {
    match dosha {
        Dosha::Vata => DoshaTraits {
            physical: vec![
                "Light, slender frame",
                "Dry skin and hair",
                "Cool hands and feet",
                "Variable appetite and digestion",
            ],
            mental: vec![
                "Quick to learn, quick to forget",
                "Creative and imaginative",
                "Enthusiastic and lively",
                "Prone to worry when stressed",
            ],
        },
        Dosha::Pitta => DoshaTraits {
            physical: vec![
                "Medium, athletic build",
                "Sharp features and penetrating gaze",
                "Warm body temperature",
                "Strong digestion",
            ],
            mental: vec![
                "Quick and decisive",
                "Natural leadership qualities",
                "Strong intellect",
                "Goal-oriented",
            ],
        },
        Dosha::Kapha => DoshaTraits {
            physical: vec![
                "Sturdy, well-built frame",
                "Smooth, soft skin and thick hair",
                "Steady energy and strong stamina",
                "Slow but regular digestion",
            ],
            mental: vec![
                "Calm and patient",
                "Loyal and compassionate",
                "Excellent long-term memory",
                "Methodical in decisions",
            ],
        },
    }
}

/// Looks up guidance for the computed pairing. A pairing that repeats the
/// same dosha falls back to that dosha's nearest partner in priority order.
pub fn guidance_for(constitution: Constitution) -> PairGuidance {
    match (constitution.primary, constitution.secondary) {
        (Dosha::Vata, Dosha::Pitta) | (Dosha::Vata, Dosha::Vata) => vata_pitta(),
        (Dosha::Vata, Dosha::Kapha) => vata_kapha(),
        (Dosha::Pitta, Dosha::Vata) | (Dosha::Pitta, Dosha::Pitta) => pitta_vata(),
        (Dosha::Pitta, Dosha::Kapha) => pitta_kapha(),
        (Dosha::Kapha, Dosha::Vata) => kapha_vata(),
        (Dosha::Kapha, Dosha::Pitta) | (Dosha::Kapha, Dosha::Kapha) => kapha_pitta(),
    }
}

fn vata_pitta() -> PairGuidance {
    PairGuidance {
        primary: Dosha::Vata,
        secondary: Dosha::Pitta,
        description: "A Vata-Pitta person combines quick, airy creativity with fiery focus. Ideas come fast and are pursued with intensity, making them inventive communicators and energetic starters. Vata's changeability can scatter their efforts, while Pitta's drive pushes them past their reserves, so imbalance tends to show as anxiety, irritability, dryness, and disrupted sleep.",
        balance_practices: vec![
            "Keep a steady daily rhythm: regular meals, work blocks, and bedtime ground restless energy.",
            "Favor warm, moist, mildly spiced meals that neither chill Vata nor inflame Pitta.",
            "Choose flowing, moderate movement over competitive or exhausting workouts.",
            "Schedule quiet time each day to settle an active mind before it turns to worry or frustration.",
            "Protect rest: switch off screens early and give the nervous system time to unwind.",
        ],
        recommendations: Recommendations {
            diet: vec![
                "Favor warm, cooked grains such as rice and oats with ghee",
                "Include sweet fruits like ripe mangoes, grapes, and dates",
                "Limit raw salads, caffeine, and very spicy dishes",
                "Eat at regular times and never skip breakfast",
            ],
            lifestyle: vec![
                "Follow a consistent wake and sleep schedule",
                "Practice warm oil self-massage (abhyanga) with sesame or coconut oil",
                "Keep workspaces calm and uncluttered",
                "Balance busy days with unstructured downtime",
            ],
            exercise: vec![
                "Gentle yoga with grounding standing poses",
                "Swimming at a relaxed pace",
                "Walking in cool morning air",
                "Tai Chi or Qigong for steady focus",
            ],
            herbs: vec![
                "Ashwagandha for steady energy",
                "Brahmi for mental calm",
                "Shatavari for nourishment",
                "Licorice root for soothing dryness",
            ],
        },
    }
}

fn vata_kapha() -> PairGuidance {
    PairGuidance {
        primary: Dosha::Vata,
        secondary: Dosha::Kapha,
        description: "A Vata-Kapha person pairs Vata's lightness and imagination with Kapha's steadiness and warmth. They are gentle, adaptable, and caring, with bursts of inspiration held together by an underlying calm. Both doshas are cold, so when out of balance they tend toward chilliness, sluggish digestion, irregular energy, and low motivation.",
        balance_practices: vec![
            "Stay warm: favor heated meals, warm drinks, and layered clothing in cold seasons.",
            "Kindle digestion with warming spices such as ginger, cumin, and black pepper.",
            "Keep a regular routine while adding variety to avoid stagnation.",
            "Build gentle, consistent activity into every day rather than occasional intense effort.",
            "Seek bright, stimulating company and sunlight to lift mood.",
        ],
        recommendations: Recommendations {
            diet: vec![
                "Favor warm, light, well-spiced soups and stews",
                "Use ginger tea before meals to kindle digestion",
                "Reduce cold, heavy, and fried foods",
                "Prefer cooked vegetables over raw ones",
            ],
            lifestyle: vec![
                "Rise early and avoid daytime naps",
                "Keep the body warm and protected from cold wind",
                "Alternate routine with new, engaging activities",
                "Spend time outdoors in sunlight",
            ],
            exercise: vec![
                "Brisk walking or light jogging",
                "Warming Sun Salutations",
                "Dance or rhythmic aerobic classes",
                "Light strength training with steady breathing",
            ],
            herbs: vec![
                "Ginger for digestive fire",
                "Trikatu for warmth and circulation",
                "Ashwagandha for resilience",
                "Tulsi for clarity and immunity",
            ],
        },
    }
}

fn pitta_vata() -> PairGuidance {
    PairGuidance {
        primary: Dosha::Pitta,
        secondary: Dosha::Vata,
        description: "A Pitta-Vata person possesses sharp intelligence, intense ambition, and quick adaptability. Pitta's fire fuels their drive and leadership skills, while Vata's air gives them creativity and curiosity. This makes them visionary thinkers, problem-solvers, and natural innovators. They excel in fast-paced environments but may become impatient, restless, or prone to burnout. Their competitive streak (Pitta) and tendency to overthink (Vata) can lead to stress, anxiety, or sleep disturbances when out of balance.",
        balance_practices: vec![
            "Prioritize Rest & Recovery: a structured daily routine with consistent sleep and relaxation prevents mental exhaustion.",
            "Choose Cooling & Nourishing Foods: favor mild, hydrating, and grounding meals (like ghee, coconut, and whole grains) to pacify excess heat and movement.",
            "Mindful Exercise: activities like swimming, yoga, or Tai Chi help balance fiery intensity with calmness.",
            "Control Overworking & Overthinking: setting healthy boundaries with work and engaging in grounding practices like deep breathing can help.",
            "Embrace Playfulness & Joy: laughter, creative hobbies, and social bonding prevent a strong drive from becoming overwhelming.",
        ],
        recommendations: Recommendations {
            diet: vec![
                "Favor cooling foods like cucumber, mint, and coconut",
                "Avoid excessive spicy, sour, and salty foods",
                "Include sweet, bitter, and astringent tastes",
                "Best meal times: 8am, 12pm, and 6pm",
            ],
            lifestyle: vec![
                "Practice meditation and deep breathing",
                "Engage in moderate exercise during cooler hours",
                "Maintain regular sleep schedule (10pm - 6am)",
                "Take breaks during intense work periods",
            ],
            exercise: vec![
                "Swimming and water activities",
                "Morning walks in nature",
                "Yoga with cooling poses",
                "Moderate intensity workouts",
            ],
            herbs: vec![
                "Aloe vera for cooling",
                "Brahmi for mental balance",
                "Amalaki for immunity",
                "Shatavari for nurturing",
            ],
        },
    }
}

fn pitta_kapha() -> PairGuidance {
    PairGuidance {
        primary: Dosha::Pitta,
        secondary: Dosha::Kapha,
        description: "A Pitta-Kapha person unites Pitta's sharpness and ambition with Kapha's strength and endurance. They are determined, dependable, and physically robust, able to lead and to see long projects through. Out of balance, Pitta's heat can surface as irritability or inflammation while Kapha's heaviness adds stubbornness, weight gain, and congestion.",
        balance_practices: vec![
            "Eat light, fresh meals that are neither too spicy nor too heavy.",
            "Keep physical activity vigorous enough to move Kapha but avoid overheating.",
            "Temper competitiveness with cooperative goals and regular reflection.",
            "Avoid oversleeping and late, heavy dinners.",
            "Make room for variety and spontaneity to prevent rigid routines.",
        ],
        recommendations: Recommendations {
            diet: vec![
                "Favor leafy greens, legumes, and bitter vegetables",
                "Choose light grains such as barley, quinoa, and millet",
                "Limit fried, oily, and overly salty foods",
                "Keep dinner early and modest",
            ],
            lifestyle: vec![
                "Wake before sunrise and keep an active morning",
                "Take cooling breaks during hot afternoons",
                "Practice gratitude journaling to soften intensity",
                "Declutter regularly to stay light and focused",
            ],
            exercise: vec![
                "Cycling or hiking at a steady pace",
                "Vinyasa yoga in a cool room",
                "Team sports played for enjoyment",
                "Swimming for full-body conditioning",
            ],
            herbs: vec![
                "Neem for cooling and cleansing",
                "Guduchi for immunity",
                "Turmeric for healthy inflammation response",
                "Triphala for gentle detoxification",
            ],
        },
    }
}

fn kapha_vata() -> PairGuidance {
    PairGuidance {
        primary: Dosha::Kapha,
        secondary: Dosha::Vata,
        description: "A Kapha-Vata person is grounded, nurturing, and steady, with a creative and sensitive streak from Vata. They offer loyalty and patience while still enjoying new ideas and artistic pursuits. Because both doshas are cool, imbalance often appears as sluggish circulation, low appetite, withdrawal, and difficulty getting started.",
        balance_practices: vec![
            "Begin each day with movement to overcome inertia.",
            "Favor warm, light, and freshly cooked foods with digestive spices.",
            "Keep a reliable routine that still includes new experiences.",
            "Stay socially connected to counter withdrawal.",
            "Keep warm and dry, especially in damp or windy weather.",
        ],
        recommendations: Recommendations {
            diet: vec![
                "Favor warm, spiced porridges and vegetable soups",
                "Add pungent spices like ginger, pepper, and cinnamon",
                "Reduce dairy, sweets, and cold drinks",
                "Sip warm water throughout the day",
            ],
            lifestyle: vec![
                "Wake by 6am and avoid napping after meals",
                "Practice dry brushing (garshana) to stimulate circulation",
                "Keep a creative hobby with regular practice",
                "Spend time with energizing friends",
            ],
            exercise: vec![
                "Brisk morning walks",
                "Moderate aerobic workouts",
                "Energizing yoga flows with backbends",
                "Dancing to lively music",
            ],
            herbs: vec![
                "Ginger for warmth and digestion",
                "Cinnamon for circulation",
                "Ashwagandha for steady vitality",
                "Pippali for respiratory support",
            ],
        },
    }
}

fn kapha_pitta() -> PairGuidance {
    PairGuidance {
        primary: Dosha::Kapha,
        secondary: Dosha::Pitta,
        description: "A Kapha-Pitta person combines Kapha's stability and stamina with Pitta's drive and clarity. They are strong, composed, and capable leaders who can sustain effort over long periods. Out of balance they may become possessive or complacent (Kapha) and critical or overheated (Pitta), with tendencies toward weight gain and congestion.",
        balance_practices: vec![
            "Keep meals light and avoid overeating, especially in the evening.",
            "Commit to vigorous daily exercise to keep energy moving.",
            "Favor bitter and astringent tastes that lighten both doshas.",
            "Welcome change and new challenges to prevent complacency.",
            "Practice letting go of control and possessiveness through reflection.",
        ],
        recommendations: Recommendations {
            diet: vec![
                "Favor steamed vegetables, beans, and light grains",
                "Use cooling spices like coriander and fennel in moderation",
                "Limit sweets, heavy dairy, and deep-fried foods",
                "Make lunch the main meal of the day",
            ],
            lifestyle: vec![
                "Rise early and stay active through the morning",
                "Take up new learning or travel to keep things fresh",
                "Keep living spaces bright and airy",
                "Practice generosity and decluttering",
            ],
            exercise: vec![
                "Running or brisk hiking",
                "Strength training with varied routines",
                "Power yoga in moderate temperatures",
                "Rowing or cycling intervals",
            ],
            herbs: vec![
                "Triphala for digestion",
                "Guggulu for healthy metabolism",
                "Neem for cooling",
                "Tulsi for respiratory health",
            ],
        },
    }
}
