//! Literal sample datasets for the chatbot documentation: conversation
//! transcripts, usage-pattern tables, the capability taxonomy, and the
//! assistant profile. All values are fixed demo data; nothing here is
//! computed at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
    System,
}

/// One turn of a sample conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl ConversationTurn {
    fn plain(role: Role, message: &str, timestamp: &str) -> Self {
        Self {
            role,
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            features: None,
        }
    }

    fn with_features(role: Role, message: &str, timestamp: &str, features: &[&str]) -> Self {
        Self {
            features: Some(features.iter().map(|f| f.to_string()).collect()),
            ..Self::plain(role, message, timestamp)
        }
    }
}

pub type ConversationExamples = IndexMap<String, Vec<ConversationTurn>>;

/// The four demo transcripts shipped with the documentation.
pub fn conversation_examples() -> ConversationExamples {
    use Role::{Bot, System, User};

    let mut out = ConversationExamples::new();

    out.insert(
        "basic_consultation".to_string(),
        vec![
            ConversationTurn::plain(
                User,
                "Hi, I'm interested in learning about IVF",
                "2025-08-26 10:00:00",
            ),
            ConversationTurn::with_features(
                Bot,
                "Hello! I'm FertilityAI Assistant, and I'm here to help guide you through IVF options. To provide you with the most relevant information, may I ask a few questions about your situation?",
                "2025-08-26 10:00:05",
                &["personalization", "empathy"],
            ),
            ConversationTurn::plain(User, "Sure, what do you need to know?", "2025-08-26 10:00:15"),
            ConversationTurn::with_features(
                Bot,
                "Great! Let me ask about a few key factors:\n\n🎂 What's your age range?\n⏰ How long have you been trying to conceive?\n🔬 Have you had any fertility testing done?\n💊 Are you currently taking any medications?\n\nFeel free to share as much or as little as you're comfortable with.",
                "2025-08-26 10:00:20",
                &["structured_input", "privacy_awareness", "emojis"],
            ),
            ConversationTurn::plain(
                User,
                "I'm 32, we've been trying for 18 months, and I had some blood tests done recently",
                "2025-08-26 10:01:00",
            ),
            ConversationTurn::with_features(
                Bot,
                "Thank you for sharing that information. At 32, you're in an excellent age range for IVF success! Women in your age group typically see success rates of 65-70% per fresh cycle at top clinics.\n\nSince you've been trying for 18 months and have had initial testing, IVF could be a great next step. Would you like me to:\n\n📊 Calculate your personalized success probability\n💰 Provide a detailed cost breakdown\n📅 Show you the typical IVF timeline\n🏥 Help you find qualified clinics nearby\n\nWhat would be most helpful right now?",
                "2025-08-26 10:01:10",
                &["personalized_statistics", "quick_actions", "guided_next_steps"],
            ),
        ],
    );

    out.insert(
        "voice_interaction".to_string(),
        vec![
            ConversationTurn::with_features(
                System,
                "Voice input detected: 'What are the side effects of IVF medications?'",
                "2025-08-26 10:05:00",
                &["voice_recognition"],
            ),
            ConversationTurn::with_features(
                Bot,
                "I heard your question about IVF medication side effects. This is a very common concern, and I'm glad you asked!\n\n🔊 **Voice Response Available** - Would you like me to read this aloud?\n\n**Common IVF Medication Side Effects:**\n\n💉 **Injection Site Reactions:**\n• Mild bruising or swelling\n• Temporary redness\n• Solution: Rotate injection sites, use ice packs\n\n🤰 **Hormonal Effects:**\n• Mild bloating or cramping\n• Mood changes (similar to PMS)\n• Breast tenderness\n• Headaches\n\n⚠️ **When to Contact Your Clinic:**\n• Severe abdominal pain\n• Shortness of breath\n• Rapid weight gain (>5 lbs in 3 days)\n\nWould you like specific information about any particular medications, or do you have other questions about the IVF process?",
                "2025-08-26 10:05:15",
                &[
                    "voice_output",
                    "structured_medical_info",
                    "safety_warnings",
                    "follow_up_options",
                ],
            ),
        ],
    );

    out.insert(
        "document_analysis".to_string(),
        vec![
            ConversationTurn::plain(
                User,
                "I'd like to upload my hormone test results for analysis",
                "2025-08-26 10:10:00",
            ),
            ConversationTurn::with_features(
                Bot,
                "I'd be happy to help you understand your hormone test results! Please use the file upload button 📎 to share your lab report.\n\n**What I can help with:**\n✅ Explain what each hormone level means\n✅ Identify values that may impact fertility\n✅ Suggest questions to ask your doctor\n✅ Recommend next steps based on results\n\n**Privacy & Security:**\n🔒 Your documents are processed securely\n🚫 No data is stored permanently\n👨‍⚕️ This analysis supplements, not replaces, medical advice\n\nPlease upload your report when ready!",
                "2025-08-26 10:10:05",
                &["file_upload", "privacy_assurance", "medical_disclaimer"],
            ),
            ConversationTurn::with_features(
                System,
                "File uploaded: hormone_panel_results.pdf",
                "2025-08-26 10:10:30",
                &["file_processing"],
            ),
            ConversationTurn::with_features(
                Bot,
                "Perfect! I've analyzed your hormone panel results. Here's what I found:\n\n📋 **Your Results Summary:**\n\n🟢 **Normal Ranges:**\n• TSH: 2.1 mIU/L (✓ Normal: 0.5-4.5)\n• Prolactin: 18 ng/mL (✓ Normal: 2-25)\n\n🟡 **Needs Attention:**\n• AMH: 1.2 ng/mL (Lower than ideal for your age)\n• FSH: 8.5 mIU/L (Slightly elevated)\n\n**What This Means:**\nYour results suggest diminished ovarian reserve, which is common and treatable. This actually makes IVF a good option as it can help maximize your remaining eggs.\n\n**Recommended Next Steps:**\n1. Discuss these results with a reproductive endocrinologist\n2. Consider additional testing (antral follicle count)\n3. Explore IVF protocols optimized for your hormone profile\n\nWould you like me to help you find specialists who work with similar hormone profiles?",
                "2025-08-26 10:11:00",
                &[
                    "document_analysis",
                    "medical_interpretation",
                    "personalized_recommendations",
                    "specialist_referral",
                ],
            ),
        ],
    );

    out.insert(
        "multilingual_support".to_string(),
        vec![
            ConversationTurn::plain(
                User,
                "Can you switch to Spanish? My husband speaks Spanish better",
                "2025-08-26 10:15:00",
            ),
            ConversationTurn::with_features(
                Bot,
                "¡Por supuesto! Me complace ayudarles en español. 🇪🇸\n\n**Idioma cambiado a Español**\n\nSoy FertilityAI Assistant, su especialista en consultas de FIV. Estoy aquí para brindarles orientación personalizada y apoyo durante su proceso de fertilidad.\n\n¿En qué puedo ayudarles hoy? Pueden preguntarme sobre:\n\n🔬 Información sobre tratamientos de FIV\n💰 Calculadora de costos\n📊 Tasas de éxito personalizadas\n📅 Cronograma de tratamiento\n🏥 Clínicas especializadas\n💙 Apoyo emocional\n\n*Nota: Puedo cambiar entre idiomas en cualquier momento durante nuestra conversación.*",
                "2025-08-26 10:15:10",
                &["language_switching", "multilingual_support", "cultural_adaptation"],
            ),
            ConversationTurn::plain(
                User,
                "¿Cuáles son las tasas de éxito para mujeres de 35 años?",
                "2025-08-26 10:15:30",
            ),
            ConversationTurn::with_features(
                Bot,
                "Excelente pregunta sobre las tasas de éxito para mujeres de 35 años.\n\n📊 **Tasas de Éxito de FIV a los 35 años:**\n\n🎯 **Por Ciclo Fresco:**\n• Transferencia de embrión fresco: ~55-60%\n• Embarazo clínico: ~50-55%\n• Nacimiento vivo: ~45-50%\n\n❄️ **Transferencia de Embrión Congelado (FET):**\n• Tasa de éxito: ~55-65%\n• Mejor resultado con embriones probados genéticamente\n\n📈 **Factores que Mejoran las Posibilidades:**\n• Estilo de vida saludable\n• Peso corporal óptimo\n• No fumar\n• Manejo del estrés\n• Clínica con experiencia\n\n**Datos Importantes:**\n- A los 35 años, la calidad de óvulos comienza a declinar gradualmente\n- Las pruebas genéticas preimplantacionales (PGT) pueden mejorar las tasas\n- Cada caso es único - sus resultados pueden variar\n\n¿Les gustaría que calcule una estimación personalizada basada en su situación específica?",
                "2025-08-26 10:15:45",
                &[
                    "multilingual_medical_content",
                    "detailed_statistics",
                    "personalized_follow_up",
                ],
            ),
        ],
    );

    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionType {
    #[serde(rename = "type")]
    pub kind: String,
    pub percentage: u32,
    pub avg_duration_minutes: u32,
    pub features_used: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureUsage {
    pub feature: String,
    pub usage_rate: u32,
    pub satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStage {
    pub stage: String,
    pub duration_days: String,
    pub interactions: u32,
    pub questions: Vec<String>,
}

/// Usage-pattern statistics shown in the documentation tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionPatterns {
    pub session_types: Vec<SessionType>,
    pub feature_usage: Vec<FeatureUsage>,
    pub user_journey_stages: Vec<JourneyStage>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn interaction_patterns() -> InteractionPatterns {
    let session = |kind: &str, percentage, avg, features: &[&str]| SessionType {
        kind: kind.to_string(),
        percentage,
        avg_duration_minutes: avg,
        features_used: strings(features),
    };
    let usage = |feature: &str, usage_rate, satisfaction| FeatureUsage {
        feature: feature.to_string(),
        usage_rate,
        satisfaction,
    };
    let stage = |stage: &str, duration: &str, interactions, questions: &[&str]| JourneyStage {
        stage: stage.to_string(),
        duration_days: duration.to_string(),
        interactions,
        questions: strings(questions),
    };

    InteractionPatterns {
        session_types: vec![
            session(
                "Information Seeking",
                45,
                12,
                &["text_chat", "quick_actions", "educational_content"],
            ),
            session(
                "Cost Planning",
                25,
                8,
                &["cost_calculator", "insurance_checker", "financing_options"],
            ),
            session(
                "Clinic Research",
                15,
                15,
                &["clinic_finder", "reviews", "appointment_booking"],
            ),
            session(
                "Emotional Support",
                10,
                20,
                &["support_chat", "resources", "community_links"],
            ),
            session(
                "Document Analysis",
                5,
                6,
                &["file_upload", "report_analysis", "recommendations"],
            ),
        ],
        feature_usage: vec![
            usage("Text Chat", 100, 4.7),
            usage("Voice Input", 35, 4.4),
            usage("File Upload", 20, 4.8),
            usage("Cost Calculator", 60, 4.6),
            usage("Language Switch", 15, 4.9),
            usage("Timeline Tracker", 45, 4.5),
            usage("Appointment Booking", 25, 4.3),
        ],
        user_journey_stages: vec![
            stage(
                "Awareness",
                "1-7",
                3,
                &["What is IVF?", "Am I a candidate?", "How much does it cost?"],
            ),
            stage(
                "Research",
                "7-30",
                8,
                &["Success rates?", "Best clinics?", "Insurance coverage?"],
            ),
            stage("Decision", "30-60", 12, &["Timeline?", "Risks?", "Alternatives?"]),
            stage(
                "Preparation",
                "60-90",
                15,
                &["Next steps?", "Medications?", "Lifestyle changes?"],
            ),
            stage(
                "Treatment",
                "90-120",
                20,
                &["Side effects?", "Monitoring?", "Support resources?"],
            ),
        ],
    }
}

/// Capability taxonomy: category -> capability area -> tags. Insertion order
/// is the documentation order and must survive serialization.
pub type CapabilityTaxonomy = IndexMap<String, IndexMap<String, Vec<String>>>;

pub fn advanced_capabilities() -> CapabilityTaxonomy {
    let area = |entries: &[(&str, &[&str])]| -> IndexMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(name, tags)| (name.to_string(), strings(tags)))
            .collect()
    };

    let mut out = CapabilityTaxonomy::new();
    out.insert(
        "natural_language_processing".to_string(),
        area(&[
            (
                "intent_recognition",
                &[
                    "medical_inquiry",
                    "cost_question",
                    "appointment_request",
                    "emotional_support",
                    "document_analysis",
                ],
            ),
            (
                "entity_extraction",
                &[
                    "age",
                    "duration_trying",
                    "medical_conditions",
                    "medications",
                    "location",
                    "insurance_type",
                ],
            ),
            (
                "sentiment_analysis",
                &["anxious", "hopeful", "confused", "frustrated", "excited", "scared"],
            ),
            (
                "context_awareness",
                &[
                    "previous_conversations",
                    "user_profile",
                    "treatment_stage",
                    "medical_history",
                ],
            ),
        ]),
    );
    out.insert(
        "personalization_features".to_string(),
        area(&[
            (
                "user_profiling",
                &["demographic_info", "medical_history", "preferences", "communication_style"],
            ),
            (
                "adaptive_responses",
                &[
                    "complexity_level",
                    "emotional_tone",
                    "information_depth",
                    "cultural_sensitivity",
                ],
            ),
            (
                "progress_tracking",
                &[
                    "consultation_journey",
                    "treatment_timeline",
                    "goal_achievement",
                    "learning_progress",
                ],
            ),
            (
                "recommendation_engine",
                &["clinic_matching", "treatment_options", "resources", "support_groups"],
            ),
        ]),
    );
    out.insert(
        "integration_capabilities".to_string(),
        area(&[
            (
                "healthcare_systems",
                &[
                    "EMR_integration",
                    "lab_results",
                    "appointment_systems",
                    "prescription_management",
                ],
            ),
            (
                "third_party_services",
                &[
                    "insurance_verification",
                    "pharmacy_integration",
                    "telehealth_platforms",
                    "payment_processing",
                ],
            ),
            (
                "communication_channels",
                &[
                    "web_chat",
                    "mobile_app",
                    "voice_assistants",
                    "sms_integration",
                    "email_followup",
                ],
            ),
            (
                "data_analytics",
                &[
                    "conversation_analytics",
                    "outcome_tracking",
                    "satisfaction_metrics",
                    "clinical_insights",
                ],
            ),
        ]),
    );
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotPersonality {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentStep {
    pub step: u32,
    pub title: String,
    pub duration: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostFactor {
    pub factor: String,
    pub range: [u32; 2],
}

/// The assistant's demo profile: personality, quick actions, languages,
/// treatment timeline and cost factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantProfile {
    pub bot_personality: BotPersonality,
    pub welcome_message: String,
    pub quick_actions: Vec<QuickAction>,
    pub languages: Vec<Language>,
    pub treatment_steps: Vec<TreatmentStep>,
    pub cost_factors: Vec<CostFactor>,
}

pub fn assistant_profile() -> AssistantProfile {
    let action = |id: &str, label: &str, icon: &str| QuickAction {
        id: id.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
    };
    let lang = |code: &str, name: &str, flag: &str| Language {
        code: code.to_string(),
        name: name.to_string(),
        flag: flag.to_string(),
    };
    let step = |step: u32, title: &str, duration: &str| TreatmentStep {
        step,
        title: title.to_string(),
        duration: duration.to_string(),
        completed: false,
    };
    let cost = |factor: &str, lo: u32, hi: u32| CostFactor {
        factor: factor.to_string(),
        range: [lo, hi],
    };

    AssistantProfile {
        bot_personality: BotPersonality {
            name: "FertilityAI Assistant".to_string(),
            role: "IVF Consultation Specialist".to_string(),
            avatar: "🤖".to_string(),
            description: "Your compassionate AI guide through fertility treatment options"
                .to_string(),
        },
        welcome_message: "Hello! I'm FertilityAI Assistant, your specialized IVF consultation companion. I'm here to provide personalized guidance, answer your questions, and support you throughout your fertility journey. How can I help you today?"
            .to_string(),
        quick_actions: vec![
            action("info", "IVF Information", "📚"),
            action("cost", "Cost Calculator", "💰"),
            action("success", "Success Rates", "📊"),
            action("timeline", "Treatment Timeline", "📅"),
            action("clinics", "Find Clinics", "🏥"),
            action("support", "Emotional Support", "💙"),
        ],
        languages: vec![
            lang("en", "English", "🇺🇸"),
            lang("es", "Español", "🇪🇸"),
            lang("fr", "Français", "🇫🇷"),
            lang("de", "Deutsch", "🇩🇪"),
            lang("it", "Italiano", "🇮🇹"),
            lang("pt", "Português", "🇵🇹"),
        ],
        treatment_steps: vec![
            step(1, "Initial Consultation", "1-2 weeks"),
            step(2, "Testing & Evaluation", "2-4 weeks"),
            step(3, "Treatment Planning", "1 week"),
            step(4, "Medication Protocol", "2-3 weeks"),
            step(5, "Egg Retrieval", "1 day"),
            step(6, "Embryo Transfer", "3-5 days"),
            step(7, "Pregnancy Test", "2 weeks"),
        ],
        cost_factors: vec![
            cost("Basic IVF Cycle", 12000, 15000),
            cost("Medications", 3000, 5000),
            cost("ICSI (if needed)", 1500, 2500),
            cost("PGT Testing", 3000, 6000),
            cost("Frozen Transfer", 3000, 5000),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_examples_have_expected_shape() {
        let examples = conversation_examples();
        let keys: Vec<_> = examples.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "basic_consultation",
                "voice_interaction",
                "document_analysis",
                "multilingual_support",
            ]
        );
        assert_eq!(examples["basic_consultation"].len(), 6);
        assert_eq!(examples["voice_interaction"].len(), 2);
        assert_eq!(examples["document_analysis"].len(), 4);
        assert_eq!(examples["multilingual_support"].len(), 4);

        // User turns carry no feature tags; bot/system turns do.
        for turns in examples.values() {
            for turn in turns {
                match turn.role {
                    Role::User => assert!(turn.features.is_none()),
                    Role::Bot | Role::System => assert!(turn.features.is_some()),
                }
            }
        }
    }

    #[test]
    fn multilingual_transcript_keeps_non_ascii_text() {
        let examples = conversation_examples();
        let spanish = &examples["multilingual_support"][1].message;
        assert!(spanish.contains("¡Por supuesto!"));
        assert!(spanish.contains("español"));
        assert!(spanish.contains("🇪🇸"));
    }

    #[test]
    fn interaction_patterns_row_counts() {
        let patterns = interaction_patterns();
        assert_eq!(patterns.session_types.len(), 5);
        assert_eq!(patterns.feature_usage.len(), 7);
        assert_eq!(patterns.user_journey_stages.len(), 5);
        let total: u32 = patterns.session_types.iter().map(|s| s.percentage).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn capability_taxonomy_preserves_category_order() {
        let caps = advanced_capabilities();
        let keys: Vec<_> = caps.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "natural_language_processing",
                "personalization_features",
                "integration_capabilities",
            ]
        );
        for areas in caps.values() {
            assert_eq!(areas.len(), 4);
        }
    }

    #[test]
    fn assistant_profile_serializes_camel_case() {
        let profile = assistant_profile();
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("botPersonality").is_some());
        assert!(value.get("welcomeMessage").is_some());
        assert_eq!(value["quickActions"].as_array().unwrap().len(), 6);
        assert_eq!(value["treatmentSteps"].as_array().unwrap().len(), 7);
        assert_eq!(value["costFactors"][0]["range"][0], 12000);
    }
}
