use crate::models::{Component, ComponentMatch, MasterNumber, NumerologyProfile};

/// Check the targeted components of a profile against the target master numbers
///
/// Returns one entry per matching component, in the order the components
/// were requested. An empty vector means the candidate is not a match.
#[inline]
pub fn matching_components(
    profile: &NumerologyProfile,
    components: &[Component],
    numbers: &[MasterNumber],
) -> Vec<ComponentMatch> {
    components
        .iter()
        .map(|&component| ComponentMatch {
            component,
            value: profile.get(component),
        })
        .filter(|m| numbers.iter().any(|n| n.value() == m.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile() -> NumerologyProfile {
        NumerologyProfile {
            life_path: 3,
            soul_urge: 22,
            expression: 11,
            personality: 11,
        }
    }

    #[test]
    fn test_all_targets() {
        let matches = matching_components(&create_test_profile(), &Component::ALL, &MasterNumber::ALL);
        let found: Vec<Component> = matches.iter().map(|m| m.component).collect();
        assert_eq!(found, vec![Component::SoulUrge, Component::Expression, Component::Personality]);
    }

    #[test]
    fn test_restricted_numbers() {
        let matches = matching_components(&create_test_profile(), &Component::ALL, &[MasterNumber::TwentyTwo]);
        assert_eq!(
            matches,
            vec![ComponentMatch { component: Component::SoulUrge, value: 22 }]
        );
    }

    #[test]
    fn test_restricted_components_keep_request_order() {
        let matches = matching_components(
            &create_test_profile(),
            &[Component::Personality, Component::LifePath, Component::Expression],
            &MasterNumber::ALL,
        );
        let found: Vec<Component> = matches.iter().map(|m| m.component).collect();
        assert_eq!(found, vec![Component::Personality, Component::Expression]);
    }

    #[test]
    fn test_no_match() {
        let matches = matching_components(&create_test_profile(), &[Component::LifePath], &MasterNumber::ALL);
        assert!(matches.is_empty());
    }
}
