use serde::Serialize;

use super::FocusEnergy;

/// Static description shown for each Focus Energy.
#[derive(Debug, Serialize)]
pub struct FocusEnergyProfile {
    pub energy_type: FocusEnergy,
    pub energy: &'static str,
    pub core_traits: &'static str,
    pub stress_response: &'static str,
    pub learning_style: &'static str,
    pub optimal_method: &'static str,
    pub tips: &'static [&'static str],
}

static KITSUNE: FocusEnergyProfile = FocusEnergyProfile {
    energy_type: FocusEnergy::Kitsune,
    energy: "Quick & Adaptable",
    core_traits: "You're a curious multi-tasker who learns by exploring. You enjoy variety and jumping between different topics.",
    stress_response: "You might feel scattered or overwhelmed by too many options. Deep, prolonged focus can sometimes be a challenge.",
    learning_style: "You connect ideas from different fields. Mind maps and brainstorming are your superpowers.",
    optimal_method: "Use the Adaptive Timer to switch subjects frequently. Project-based learning keeps you engaged.",
    tips: &[
        "Group small, varied tasks together to satisfy your curiosity.",
        "Schedule 'exploration time' so you can discover new things without derailing core tasks.",
        "Use the Priority Matrix to ensure you're chasing important new ideas, not just any new idea.",
    ],
};

static TORA: FocusEnergyProfile = FocusEnergyProfile {
    energy_type: FocusEnergy::Tora,
    energy: "Deep & Intense",
    core_traits: "You excel at deep, sustained concentration on a single subject. You're methodical and prefer to see one thing through to completion.",
    stress_response: "Switching tasks frequently can be draining. You might get frustrated when your flow state is interrupted.",
    learning_style: "You learn best through linear, structured material. Master one concept before moving to the next.",
    optimal_method: "Use the Adaptive Timer for long, uninterrupted work sessions. Block out time for specific subjects.",
    tips: &[
        "Dedicate specific days to specific subjects to maintain focus.",
        "Use the 'Deep Work' preparation checklist before starting an Adaptive session.",
        "Break large projects into sequential, manageable tasks.",
    ],
};

static KUMA: FocusEnergyProfile = FocusEnergyProfile {
    energy_type: FocusEnergy::Kuma,
    energy: "Steady & Foundational",
    core_traits: "You thrive on routine and consistency. You build knowledge brick by brick, ensuring a solid foundation.",
    stress_response: "Unpredictable schedules can be unsettling. You prefer a clear plan and may resist sudden changes.",
    learning_style: "You learn through repetition and practice. Well-structured routines and habits are key to your success.",
    optimal_method: "The Pomodoro technique is perfect for you, providing a predictable rhythm of work and rest. Set daily goals.",
    tips: &[
        "Stick to a consistent study schedule to build momentum.",
        "Review past material regularly to reinforce your knowledge base.",
        "Use the Daily Goal feature on the Dashboard to track your consistency.",
    ],
};

static HYBRID: FocusEnergyProfile = FocusEnergyProfile {
    energy_type: FocusEnergy::Hybrid,
    energy: "Balanced & Evolving",
    core_traits: "Your style is still emerging. You show a mix of traits, adapting your approach as needed. Keep exploring to find what works best!",
    stress_response: "You're still figuring out your triggers. Pay attention to when you feel most productive and when you feel drained.",
    learning_style: "You're a generalist, able to learn in various ways. This is a great time to experiment with different techniques.",
    optimal_method: "Try both Pomodoro and Adaptive timers. Your profile will become clearer as you log more sessions.",
    tips: &[
        "Log at least 5 sessions to get your personalized Focus Energy profile.",
        "Experiment with different subjects and timer settings.",
        "Don't worry about being perfect; focus on building a consistent habit.",
    ],
};

pub(super) fn profile_for(energy: FocusEnergy) -> &'static FocusEnergyProfile {
    match energy {
        FocusEnergy::Kitsune => &KITSUNE,
        FocusEnergy::Tora => &TORA,
        FocusEnergy::Kuma => &KUMA,
        FocusEnergy::Hybrid => &HYBRID,
    }
}
