use mise_en_place::{sectionize, Heading, Section};

const FULL_PLAN: &str = "Here is your plan.

RECIPE SUGGESTIONS
Lemon chicken with rice, about 520 kcal.

NUTRITIONAL OVERVIEW
Good protein, light on fibre.

GOAL ALIGNMENT
Keep portions steady.

SMART SUBSTITUTIONS
Use brown rice.
";

#[test]
fn test_all_headings_in_order() {
    let sections = sectionize(FULL_PLAN);

    assert_eq!(sections.len(), 4);
    let headings: Vec<Heading> = sections.iter().filter_map(|s| s.heading).collect();
    assert_eq!(headings, Heading::ALL.to_vec());

    assert_eq!(sections[0].body, "Lemon chicken with rice, about 520 kcal.");
    assert_eq!(sections[1].body, "Good protein, light on fibre.");
    assert_eq!(sections[2].body, "Keep portions steady.");
    assert_eq!(sections[3].body, "Use brown rice.");
}

#[test]
fn test_each_body_ends_before_next_heading() {
    let sections = sectionize(FULL_PLAN);
    for pair in sections.windows(2) {
        let next_label = pair[1].heading.unwrap().label();
        let expected_end = FULL_PLAN.find(next_label).unwrap();
        let body_at = FULL_PLAN.find(&pair[0].body).unwrap();
        assert!(body_at + pair[0].body.len() <= expected_end);
        assert!(FULL_PLAN[body_at + pair[0].body.len()..expected_end]
            .trim()
            .is_empty());
    }
}

#[test]
fn test_no_headings_gives_single_unlabeled_section() {
    let text = "\n  Eat more greens and drink water.  \n";
    assert_eq!(
        sectionize(text),
        vec![Section {
            heading: None,
            body: "Eat more greens and drink water.".to_string(),
        }]
    );
}

#[test]
fn test_missing_heading_is_skipped() {
    let text = "RECIPE SUGGESTIONS\nTofu scramble.\nSMART SUBSTITUTIONS\nAdd spinach.";
    let sections = sectionize(text);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].heading, Some(Heading::RecipeSuggestions));
    assert_eq!(sections[0].body, "Tofu scramble.");
    assert_eq!(sections[1].heading, Some(Heading::SmartSubstitutions));
}

#[test]
fn test_empty_body_between_adjacent_headings() {
    let sections = sectionize("GOAL ALIGNMENT\nSMART SUBSTITUTIONS\nSwap butter for oil.");
    assert_eq!(sections[0].body, "");
    assert_eq!(sections[1].body, "Swap butter for oil.");
}

#[test]
fn test_repeated_heading_uses_first_occurrence() {
    let text = "NUTRITIONAL OVERVIEW\nFirst.\nNUTRITIONAL OVERVIEW\nSecond.";
    let sections = sectionize(text);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].body, "First.\nNUTRITIONAL OVERVIEW\nSecond.");
}

#[test]
fn test_sectionize_is_deterministic() {
    assert_eq!(sectionize(FULL_PLAN), sectionize(FULL_PLAN));
}

#[test]
fn test_display_mapping() {
    let sections = sectionize(FULL_PLAN);
    let rendered: Vec<(Option<&str>, Option<String>)> =
        sections.iter().map(|s| (s.icon(), s.title())).collect();
    assert_eq!(
        rendered,
        vec![
            (Some("🍽"), Some("Recipe Suggestions".to_string())),
            (Some("📊"), Some("Nutritional Overview".to_string())),
            (Some("🎯"), Some("Goal Alignment".to_string())),
            (Some("🔄"), Some("Smart Substitutions".to_string())),
        ]
    );
}
