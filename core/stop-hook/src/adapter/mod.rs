pub(crate) mod random_message_picker;
pub(crate) mod tts_script_announcer;

pub(crate) use random_message_picker::RandomMessagePicker;
pub(crate) use tts_script_announcer::TtsScriptAnnouncer;
