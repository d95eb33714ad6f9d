//! HEXACO-24 personality statements.

use super::ScaleQuestion;

pub static HEXACO_QUESTIONS: [ScaleQuestion; 24] = [
    ScaleQuestion {
        id: "q1",
        text: "I can look at a painting for a long time.",
        dimension: "openness",
        facet: Some("aesthetic"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q2",
        text: "I make sure that things are in the right spot.",
        dimension: "conscientiousness",
        facet: Some("organization"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q3",
        text: "I remain unfriendly to someone who was mean to me.",
        dimension: "agreeableness",
        facet: Some("forgiveness"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q4",
        text: "Nobody likes talking with me.",
        dimension: "extraversion",
        facet: Some("social_self_esteem"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q5",
        text: "I am afraid of feeling pain.",
        dimension: "emotionality",
        facet: Some("fearfulness"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q6",
        text: "I find it difficult to lie.",
        dimension: "honesty_humility",
        facet: Some("sincerity"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q7",
        text: "I think science is boring.",
        dimension: "openness",
        facet: Some("inquisitiveness"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q8",
        text: "I postpone complicated tasks as long as possible.",
        dimension: "conscientiousness",
        facet: Some("diligence"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q9",
        text: "I often express criticism.",
        dimension: "agreeableness",
        facet: Some("gentleness"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q10",
        text: "I easily approach strangers.",
        dimension: "extraversion",
        facet: Some("social_boldness"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q11",
        text: "I worry less than others.",
        dimension: "emotionality",
        facet: Some("anxiety"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q12",
        text: "I would like to know how to make lots of money in a dishonest manner.",
        dimension: "honesty_humility",
        facet: Some("fairness"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q13",
        text: "I have a lot of imagination.",
        dimension: "openness",
        facet: Some("creativity"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q14",
        text: "I work very precisely.",
        dimension: "conscientiousness",
        facet: Some("perfectionism"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q15",
        text: "I tend to quickly agree with others.",
        dimension: "agreeableness",
        facet: Some("flexibility"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q16",
        text: "I like to talk with others.",
        dimension: "extraversion",
        facet: Some("sociability"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q17",
        text: "I can easily overcome difficulties on my own.",
        dimension: "emotionality",
        facet: Some("dependence"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q18",
        text: "I want to be famous.",
        dimension: "honesty_humility",
        facet: Some("greed_avoidance"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q19",
        text: "I like people with strange ideas.",
        dimension: "openness",
        facet: Some("unconventionality"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q20",
        text: "I often do things without really thinking.",
        dimension: "conscientiousness",
        facet: Some("prudence"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q21",
        text: "Even when I'm treated badly, I remain calm.",
        dimension: "agreeableness",
        facet: Some("patience"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q22",
        text: "I am seldom cheerful.",
        dimension: "extraversion",
        facet: Some("liveliness"),
        reversed: true,
    },
    ScaleQuestion {
        id: "q23",
        text: "I have to cry during sad or romantic movies.",
        dimension: "emotionality",
        facet: Some("sentimentality"),
        reversed: false,
    },
    ScaleQuestion {
        id: "q24",
        text: "I am entitled to special treatment.",
        dimension: "honesty_humility",
        facet: Some("modesty"),
        reversed: true,
    },
];
