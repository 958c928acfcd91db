//! The employment application: four prompts asked in order.

use crate::core::prompt::{Prompt, Validation};

pub const CLASS_KEY: &str = "class";
pub const LEVEL_KEY: &str = "level";
pub const SKILLS_KEY: &str = "skills";
pub const DONE_KEY: &str = "done";

pub fn application_prompts() -> Vec<Prompt> {
    vec![
        Prompt::select(CLASS_KEY, vec!["Warrior", "Mage", "Rogue"])
            .title("Choose your class")
            .description("This will determine your department"),
        Prompt::select(LEVEL_KEY, vec!["1", "20", "9999"])
            .title("Choose your level")
            .description("This will determine your benefits package"),
        Prompt::multi_select(SKILLS_KEY, vec!["🌞 Light Magic", "🔮 Enchantment"])
            .title("Choose your skills")
            .description("This will determine your starting equipment"),
        Prompt::confirm(DONE_KEY, "Yep", "Wait, no")
            .title("All done?")
            .validate(Validation::MustAffirm("welp, finish up then")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::PromptKind;

    #[test]
    fn test_prompt_order_and_keys() {
        let keys: Vec<_> = application_prompts().iter().map(|p| p.key).collect();
        assert_eq!(keys, vec![CLASS_KEY, LEVEL_KEY, SKILLS_KEY, DONE_KEY]);
    }

    #[test]
    fn test_only_confirmation_is_validated() {
        let prompts = application_prompts();
        let last = prompts.last().unwrap();
        assert!(matches!(last.kind, PromptKind::Confirm { .. }));
        assert_eq!(last.validation, Validation::MustAffirm("welp, finish up then"));
        assert!(
            prompts[..3]
                .iter()
                .all(|p| p.validation == Validation::None)
        );
    }
}
