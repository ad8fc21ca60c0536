use crate::error::{Error, Result};
use crate::geom::Point;
use serde::{Deserialize, Serialize};

/// Category of a journey step; selects the marker style in the flowchart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    Entry,
    BotResponse,
    Decision,
    Feature,
    AiProcess,
    Action,
}

impl std::fmt::Display for StepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepType::Entry => "entry",
            StepType::BotResponse => "bot_response",
            StepType::Decision => "decision",
            StepType::Feature => "feature",
            StepType::AiProcess => "ai_process",
            StepType::Action => "action",
        };
        f.write_str(s)
    }
}

/// Relation kind of a transition between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Automatic,
    UserChoice,
    Branch,
    Process,
    Completion,
    Final,
}

/// A labeled point in the user-journey graph, with a fixed display position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub description: String,
    pub x: f64,
    pub y: f64,
}

impl Step {
    fn new(name: &str, step_type: StepType, description: &str, x: f64, y: f64) -> Self {
        Self {
            name: name.to_string(),
            step_type,
            description: description.to_string(),
            x,
            y,
        }
    }

    pub fn position(&self) -> Point {
        crate::geom::point(self.x, self.y)
    }

    /// Display label for the marker. Names over 15 characters are shortened
    /// via a fixed lookup so they fit inside the marker.
    pub fn display_label(&self) -> &str {
        if self.name.chars().count() <= 15 {
            return &self.name;
        }
        abbreviate(&self.name).unwrap_or(&self.name)
    }
}

// Manual abbreviation table carried over from the figure design. Some
// entries ("Doc Upload", "Cost Calc", "Personaliz", "Export") cover names
// of 15 characters or fewer and are kept for completeness even though the
// length check never reaches them.
fn abbreviate(name: &str) -> Option<&'static str> {
    match name {
        "Feature Selection" => Some("Feature Select"),
        "Document Upload" => Some("Doc Upload"),
        "Cost Calculator" => Some("Cost Calc"),
        "Appointment Booking" => Some("Booking"),
        "Language Selection" => Some("Language"),
        "Educational Content" => Some("Education"),
        "Personalization" => Some("Personaliz"),
        "Export Options" => Some("Export"),
        _ => None,
    }
}

/// A directed relation between two steps, by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
}

impl Interaction {
    fn new(from: &str, to: &str, kind: InteractionKind) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            kind,
        }
    }
}

/// The chatbot's user-journey graph: steps plus typed transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyGraph {
    pub title: String,
    pub steps: Vec<Step>,
    pub interactions: Vec<Interaction>,
}

impl JourneyGraph {
    /// The FertilityAI user journey as designed for the documentation
    /// flowchart: 11 steps, 13 interactions, fixed layout coordinates.
    pub fn fertility_ai() -> Self {
        use InteractionKind as K;
        use StepType as T;

        let steps = vec![
            Step::new("Landing", T::Entry, "User visits FertilityAI chatbot", 0.0, 10.0),
            Step::new(
                "Welcome",
                T::BotResponse,
                "Bot greets and explains capabilities",
                0.0,
                8.0,
            ),
            Step::new(
                "Feature Selection",
                T::Decision,
                "User chooses interaction type",
                0.0,
                6.0,
            ),
            Step::new("Voice Input", T::Feature, "Speech-to-text conversation", -4.0, 4.0),
            Step::new("Document Upload", T::Feature, "Medical report analysis", -2.0, 4.0),
            Step::new(
                "Cost Calculator",
                T::Feature,
                "Personalized pricing estimation",
                0.0,
                4.0,
            ),
            Step::new("Appointment Booking", T::Feature, "Schedule consultation", 2.0, 4.0),
            Step::new("Language Selection", T::Feature, "Multi-language support", 4.0, 4.0),
            Step::new(
                "Educational Content",
                T::Feature,
                "IVF information and resources",
                6.0,
                4.0,
            ),
            Step::new(
                "Personalization",
                T::AiProcess,
                "AI adapts responses based on user profile",
                -1.0,
                2.0,
            ),
            Step::new(
                "Export Options",
                T::Action,
                "Save conversation and recommendations",
                1.0,
                0.0,
            ),
        ];

        let interactions = vec![
            Interaction::new("Landing", "Welcome", K::Automatic),
            Interaction::new("Welcome", "Feature Selection", K::UserChoice),
            Interaction::new("Feature Selection", "Voice Input", K::Branch),
            Interaction::new("Feature Selection", "Document Upload", K::Branch),
            Interaction::new("Feature Selection", "Cost Calculator", K::Branch),
            Interaction::new("Feature Selection", "Appointment Booking", K::Branch),
            Interaction::new("Feature Selection", "Language Selection", K::Branch),
            Interaction::new("Feature Selection", "Educational Content", K::Branch),
            Interaction::new("Voice Input", "Personalization", K::Process),
            Interaction::new("Document Upload", "Personalization", K::Process),
            Interaction::new("Cost Calculator", "Personalization", K::Process),
            Interaction::new("Appointment Booking", "Export Options", K::Completion),
            Interaction::new("Personalization", "Export Options", K::Final),
        ];

        Self {
            title: "FertilityAI User Flow".to_string(),
            steps,
            interactions,
        }
    }

    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// Checks the edge-name invariant: every interaction endpoint must name
    /// a declared step. A graph that fails this would previously have
    /// crashed on a map lookup at render time.
    pub fn validate(&self) -> Result<()> {
        for interaction in &self.interactions {
            for name in [&interaction.from, &interaction.to] {
                if self.step(name).is_none() {
                    return Err(Error::UnknownStep { name: name.clone() });
                }
            }
        }
        tracing::debug!(
            steps = self.steps.len(),
            interactions = self.interactions.len(),
            "journey graph validated"
        );
        Ok(())
    }
}
