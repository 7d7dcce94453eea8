pub mod gemini_tutor;
