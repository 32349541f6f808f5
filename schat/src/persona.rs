//! Fixed persona and safety instructions prepended to every generation prompt.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub style: String,
    pub safety_protocol: String,
}

impl Persona {
    pub fn new(
        name: impl Into<String>,
        style: impl Into<String>,
        safety_protocol: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
            safety_protocol: safety_protocol.into(),
        }
    }

    pub fn sahara() -> Self {
        Self::new(
            "Sahara",
            concat!(
                "You are \"Sahara,\" an AI mental wellness companion. ",
                "Speak warmly and without judgement, like a calm friend who listens first. ",
                "Keep replies short enough to be read aloud, usually two to four sentences. ",
                "Reflect the user's feelings back, ask gentle open questions, and offer one ",
                "small grounding idea when it fits. You are not a therapist and do not diagnose ",
                "or prescribe."
            ),
            concat!(
                "Safety protocol: if the user mentions self-harm, suicide, wanting to die, or ",
                "being in danger, do not continue the normal conversation. Tell them clearly ",
                "that they are not alone and urge them to contact their local emergency number ",
                "or a suicide prevention hotline right away."
            ),
        )
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::sahara()
    }
}
