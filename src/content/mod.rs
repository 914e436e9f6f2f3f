//! The deck's text content, kept apart from layout.

use crate::theme::Role;

/// Everything the five slides say.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckContent {
    pub title: TitleContent,
    pub contrast: ContrastContent,
    pub features: FeaturesContent,
    pub architecture: ArchitectureContent,
    pub impact: ImpactContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleContent {
    pub icon: String,
    pub headline: String,
    pub subtitle: String,
    pub event: String,
    pub motto: String,
    pub tags: Vec<String>,
}

/// A heading over a bulleted list.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContrastContent {
    pub title: String,
    pub problem: Section,
    pub solution: Section,
}

/// One card of the feature grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturesContent {
    pub title: String,
    pub features: Vec<Feature>,
}

/// One column of the architecture diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    /// Fill of the column box
    pub accent: Role,
    pub section: Section,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchitectureContent {
    pub title: String,
    pub tiers: Vec<Tier>,
    /// Glyph placed between neighboring tiers
    pub connector: String,
    pub stack: Vec<String>,
}

/// Three stacked, centered lines inside the closing box.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub headline: String,
    pub tagline: String,
    pub closing: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactContent {
    pub title: String,
    pub impact: Section,
    pub roadmap: Section,
    pub callout: Callout,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn section(heading: &str, items: &[&str]) -> Section {
    Section {
        heading: heading.to_string(),
        items: strings(items),
    }
}

impl DeckContent {
    /// The DeskBot showcase deck.
    pub fn showcase() -> Self {
        Self {
            title: TitleContent {
                icon: "🤖".into(),
                headline: "DeskBot AI Companion".into(),
                subtitle: "Your Intelligent Desktop Friend Powered by ESP32 & AI".into(),
                event: "🌐 International Innovation Showcase 2026".into(),
                motto: "Bridging Technology & Human Connection".into(),
                tags: strings(&[
                    "🔌 ESP32 Hardware",
                    "🧠 Gemini AI",
                    "🗣️ Voice Interaction",
                    "📱 Mobile Control",
                ]),
            },
            contrast: ContrastContent {
                title: "🎯 The Challenge & Our Solution".into(),
                problem: section(
                    "❌ The Problem",
                    &[
                        "Increasing isolation in digital workspaces",
                        "Mental health challenges from remote work",
                        "Expensive AI companions ($500-$2000)",
                        "Complex setup requiring technical expertise",
                        "No affordable emotional support technology",
                        "Limited accessibility for developing regions",
                    ],
                ),
                solution: section(
                    "✅ DeskBot Solution",
                    &[
                        "Affordable companion under $30 total cost",
                        "Emotional expressions via OLED & LED lights",
                        "Free AI powered by Google Gemini API",
                        "Plug-and-play with phone hotspot",
                        "Multilingual support (English + Tamil)",
                        "DIY-friendly cardboard/3D printed body",
                    ],
                ),
            },
            features: FeaturesContent {
                title: "✨ Key Features & Capabilities".into(),
                features: [
                    ("👀", "Expressive OLED Eyes", "Custom eye engine with 15+ emotional states"),
                    ("🧠", "AI Conversation", "Google Gemini 2.5 Flash for intelligent chat"),
                    ("🗣️", "Voice Interaction", "Edge TTS output + Web Speech input"),
                    ("🌈", "Mood LED Ring", "16 WS2812 LEDs synced with emotions"),
                    ("📱", "Mobile Web Control", "Responsive dashboard from any browser"),
                    ("🤲", "Multi-Sensor Aware", "Touch, motion, distance, light sensors"),
                ]
                .into_iter()
                .map(|(icon, title, description)| Feature {
                    icon: icon.into(),
                    title: title.into(),
                    description: description.into(),
                })
                .collect(),
            },
            architecture: ArchitectureContent {
                title: "🏗️ System Architecture".into(),
                tiers: vec![
                    Tier {
                        accent: Role::AccentSecondary,
                        section: section(
                            "🔌 ESP32 Hardware",
                            &[
                                "SH1106 OLED Display",
                                "SG90 Servo Motor",
                                "WS2812 LED Ring",
                                "Ultrasonic Sensor",
                                "PIR Motion Sensor",
                                "Touch Sensors",
                            ],
                        ),
                    },
                    Tier {
                        accent: Role::Info,
                        section: section(
                            "🖥️ Node.js Server",
                            &[
                                "WebSocket Bridge",
                                "Gemini AI Integration",
                                "Edge TTS Engine",
                                "Audio Management",
                                "State Synchronization",
                            ],
                        ),
                    },
                    Tier {
                        accent: Role::Growth,
                        section: section(
                            "🌐 Web Interface",
                            &[
                                "Real-time Dashboard",
                                "Chat Interface",
                                "Behavior Controls",
                                "Sensor Monitoring",
                                "Speech Recognition",
                            ],
                        ),
                    },
                ],
                connector: "⟷".into(),
                stack: strings(&[
                    "⚡ C++ / Arduino",
                    "🟢 Node.js",
                    "🌐 WebSocket",
                    "🤖 Gemini 2.5",
                    "🔊 Edge TTS",
                    "📱 PWA Ready",
                ]),
            },
            impact: ImpactContent {
                title: "🌍 Impact & Future Vision".into(),
                impact: section(
                    "🎯 Social Impact",
                    &[
                        "💰 Democratizes AI for all income levels",
                        "🧠 Mental wellness through friendly interaction",
                        "🎓 Educational tool for STEM & robotics",
                        "👴 Elderly companionship & assistance",
                        "🌐 Multilingual accessibility",
                    ],
                ),
                roadmap: section(
                    "🚀 Future Roadmap",
                    &[
                        "🏥 Healthcare integration for patients",
                        "📚 Educational AI tutor capabilities",
                        "🏠 Smart home IoT hub integration",
                        "🎮 Gamification for productivity",
                        "🤝 Open-source community expansion",
                    ],
                ),
                callout: Callout {
                    headline: "🤖 Meet DeskBot - Technology with Heart".into(),
                    tagline: "Affordable • Open Source • Accessible • Human-Centered AI".into(),
                    closing: "✨ Thank you! Questions Welcome! ✨".into(),
                },
            },
        }
    }
}

impl Default for DeckContent {
    fn default() -> Self {
        Self::showcase()
    }
}
