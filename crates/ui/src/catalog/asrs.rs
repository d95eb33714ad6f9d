//! ASRS adult ADHD screener items.

use super::{AnswerOption, ChoiceQuestion};

pub static ASRS_QUESTIONS: [ChoiceQuestion; 18] = [
    ChoiceQuestion {
        id: "asrs1",
        text: "How often do you have trouble wrapping up the fine details of a project, once the challenging parts have been done?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs2",
        text: "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs3",
        text: "How often do you have problems remembering appointments or obligations?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs4",
        text: "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs5",
        text: "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs6",
        text: "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs7",
        text: "How often do you make careless mistakes when you have to work on a boring or difficult project?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs8",
        text: "How often do you have difficulty keeping your attention when you are doing boring or repetitive work?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs9",
        text: "How often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs10",
        text: "How often do you misplace or have difficulty finding things at home or at work?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs11",
        text: "How often are you distracted by activity or noise around you?",
        tag: Some("Inattention"),
    },
    ChoiceQuestion {
        id: "asrs12",
        text: "How often do you leave your seat in meetings or other situations where you are expected to remain seated?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs13",
        text: "How often do you feel restless or fidgety?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs14",
        text: "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs15",
        text: "How often do you find yourself talking too much when you are in social situations?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs16",
        text: "When you're in a conversation, how often do you find yourself finishing the sentences of the people you are talking to, before they can finish them themselves?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs17",
        text: "How often do you have difficulty waiting your turn in situations when turn taking is required?",
        tag: Some("Hyperactivity"),
    },
    ChoiceQuestion {
        id: "asrs18",
        text: "How often do you interrupt others when they are busy?",
        tag: Some("Hyperactivity"),
    },
];

pub static ASRS_OPTIONS: [AnswerOption; 5] = [
    AnswerOption { value: "never", label: "Never" },
    AnswerOption { value: "rarely", label: "Rarely" },
    AnswerOption { value: "sometimes", label: "Sometimes" },
    AnswerOption { value: "often", label: "Often" },
    AnswerOption { value: "very_often", label: "Very Often" },
];
