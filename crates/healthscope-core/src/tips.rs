//! Static public-health tips.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HealthTip {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const TIPS: [HealthTip; 6] = [
    HealthTip {
        icon: "🦟",
        title: "Prevent Mosquito Bites",
        description: "Use mosquito nets, wear long sleeves, and apply repellent to protect against dengue and malaria.",
    },
    HealthTip {
        icon: "💧",
        title: "Drink Clean Water",
        description: "Always drink boiled or filtered water to prevent waterborne diseases like typhoid and cholera.",
    },
    HealthTip {
        icon: "🧼",
        title: "Wash Your Hands",
        description: "Regular handwashing with soap prevents the spread of many infectious diseases.",
    },
    HealthTip {
        icon: "🍎",
        title: "Eat Healthy Foods",
        description: "A balanced diet rich in fruits and vegetables strengthens your immune system.",
    },
    HealthTip {
        icon: "💉",
        title: "Stay Vaccinated",
        description: "Keep your vaccinations up to date to protect against preventable diseases.",
    },
    HealthTip {
        icon: "😴",
        title: "Get Enough Sleep",
        description: "7-8 hours of quality sleep helps your body fight infections and stay healthy.",
    },
];

pub fn health_tips() -> &'static [HealthTip] {
    &TIPS
}
