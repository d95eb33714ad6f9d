//! AQ-10 autism spectrum screener statements.

use super::{AnswerOption, ChoiceQuestion};

pub static AQ10_QUESTIONS: [ChoiceQuestion; 10] = [
    ChoiceQuestion {
        id: "aq1",
        text: "I often notice small sounds when others do not.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq2",
        text: "I usually concentrate more on the whole picture, rather than the small details.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq3",
        text: "I find it easy to do more than one thing at once.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq4",
        text: "If there is an interruption, I can switch back to what I was doing very quickly.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq5",
        text: "I find it easy to 'read between the lines' when someone is talking to me.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq6",
        text: "I know how to tell if someone listening to me is getting bored.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq7",
        text: "When I'm reading a story I find it difficult to work out the characters' intentions.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq8",
        text: "I like to collect information about categories of things.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq9",
        text: "I find it easy to work out what someone is thinking or feeling just by looking at their face.",
        tag: None,
    },
    ChoiceQuestion {
        id: "aq10",
        text: "I find it difficult to work out people's intentions.",
        tag: None,
    },
];

pub static AQ10_OPTIONS: [AnswerOption; 4] = [
    AnswerOption { value: "definitely_agree", label: "Definitely Agree" },
    AnswerOption { value: "slightly_agree", label: "Slightly Agree" },
    AnswerOption { value: "slightly_disagree", label: "Slightly Disagree" },
    AnswerOption { value: "definitely_disagree", label: "Definitely Disagree" },
];
