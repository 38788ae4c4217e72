mod ask_question;

pub use ask_question::AskQuestion;
