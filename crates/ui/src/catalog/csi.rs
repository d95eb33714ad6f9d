//! Communication Styles Inventory statements, grouped four per dimension.

use super::ScaleQuestion;

pub static CSI_QUESTIONS: [ScaleQuestion; 16] = [
    ScaleQuestion {
        id: "struct1",
        text: "When I tell a story, the different parts are always clearly related to each other.",
        dimension: "structuredness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "struct2",
        text: "I sometimes find it hard to tell a story in an organized way.",
        dimension: "structuredness",
        facet: None,
        reversed: true,
    },
    ScaleQuestion {
        id: "struct3",
        text: "I always express a clear chain of thoughts when I argue a point.",
        dimension: "structuredness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "struct4",
        text: "My stories always contain a logical structure.",
        dimension: "structuredness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "thought1",
        text: "I think carefully before I say something.",
        dimension: "thoughtfulness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "thought2",
        text: "I weigh my answers carefully.",
        dimension: "thoughtfulness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "thought3",
        text: "The statements I make are not always well thought out.",
        dimension: "thoughtfulness",
        facet: None,
        reversed: true,
    },
    ScaleQuestion {
        id: "thought4",
        text: "I choose my words with care.",
        dimension: "thoughtfulness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "subst1",
        text: "Conversations with me always involve some important topic.",
        dimension: "substantiveness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "subst2",
        text: "You won't hear me jabbering about superficial or shallow matters.",
        dimension: "substantiveness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "subst3",
        text: "I am someone who can often talk about trivial things.",
        dimension: "substantiveness",
        facet: None,
        reversed: true,
    },
    ScaleQuestion {
        id: "subst4",
        text: "I rarely, if ever, just chatter away about something.",
        dimension: "substantiveness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "concise1",
        text: "I don't need a lot of words to get my message across.",
        dimension: "conciseness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "concise2",
        text: "Most of the time, I only need a few words to explain something.",
        dimension: "conciseness",
        facet: None,
        reversed: false,
    },
    ScaleQuestion {
        id: "concise3",
        text: "I am somewhat long-winded when I need to explain something.",
        dimension: "conciseness",
        facet: None,
        reversed: true,
    },
    ScaleQuestion {
        id: "concise4",
        text: "With a few words, I can usually clarify my point to everybody.",
        dimension: "conciseness",
        facet: None,
        reversed: false,
    },
];

/// Display heading for a CSI dimension key.
#[must_use]
pub fn dimension_title(dimension: &str) -> &'static str {
    match dimension {
        "structuredness" => "Structuredness",
        "thoughtfulness" => "Thoughtfulness",
        "substantiveness" => "Substantiveness",
        "conciseness" => "Conciseness",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_dimensions_with_four_items_each() {
        for dimension in [
            "structuredness",
            "thoughtfulness",
            "substantiveness",
            "conciseness",
        ] {
            let count = CSI_QUESTIONS
                .iter()
                .filter(|q| q.dimension == dimension)
                .count();
            assert_eq!(count, 4, "{dimension} should have 4 items");
            assert!(!dimension_title(dimension).is_empty());
        }
    }

    #[test]
    fn items_are_grouped_by_dimension() {
        // The view renders a heading whenever the dimension changes, which
        // only reads well if each dimension's items are contiguous.
        let mut seen = Vec::new();
        for question in &CSI_QUESTIONS {
            if seen.last() != Some(&question.dimension) {
                assert!(!seen.contains(&question.dimension));
                seen.push(question.dimension);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
