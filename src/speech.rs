use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(pub u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,
    #[error("speech synthesis rejected the utterance: {0}")]
    Rejected(String),
}

/// Platform text-to-speech backend.
///
/// Implementations report the natural end of an utterance back to
/// [`SpeechToggle::finished`] with the id they were given.
pub trait Synthesizer {
    fn is_supported(&self) -> bool;
    fn speak(&mut self, utterance: UtteranceId, text: &str) -> Result<(), SpeechError>;
    fn cancel(&mut self);
}

/// "Listen" button state: at most one utterance is ever in flight.
pub struct SpeechToggle<S> {
    synth: S,
    text: String,
    current: Option<UtteranceId>,
    next_id: u64,
}

impl<S: Synthesizer> SpeechToggle<S> {
    pub fn new(synth: S, text: impl Into<String>) -> Self {
        Self {
            synth,
            text: text.into(),
            current: None,
            next_id: 0,
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_supported(&self) -> bool {
        self.synth.is_supported()
    }

    pub fn synth(&self) -> &S {
        &self.synth
    }

    /// Starts speaking when idle, stops when speaking. Returns the new speaking flag.
    pub fn toggle(&mut self) -> Result<bool, SpeechError> {
        if self.is_speaking() {
            self.stop();
            return Ok(false);
        }
        self.start()?;
        Ok(true)
    }

    /// Speaks the intro from the beginning, superseding anything in flight.
    pub fn start(&mut self) -> Result<UtteranceId, SpeechError> {
        if !self.synth.is_supported() {
            return Err(SpeechError::Unavailable);
        }
        self.synth.cancel();
        self.current = None;
        let id = UtteranceId(self.next_id);
        self.next_id += 1;
        self.synth.speak(id, &self.text)?;
        self.current = Some(id);
        Ok(id)
    }

    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.synth.cancel();
        }
    }

    /// End event from the backend. Events for superseded utterances are ignored.
    pub fn finished(&mut self, utterance: UtteranceId) -> bool {
        if self.current == Some(utterance) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(feature = "hydrate")]
pub mod browser {
    use std::rc::Rc;

    use wasm_bindgen::{prelude::Closure, JsCast};
    use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

    use super::{SpeechError, Synthesizer, UtteranceId};

    /// `window.speechSynthesis` backed [`Synthesizer`].
    pub struct BrowserSpeech {
        synth: Option<SpeechSynthesis>,
        on_end: Rc<dyn Fn(UtteranceId)>,
        active: Option<(SpeechSynthesisUtterance, Closure<dyn FnMut()>)>,
    }

    impl BrowserSpeech {
        pub fn new(on_end: impl Fn(UtteranceId) + 'static) -> Self {
            let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
            if synth.is_none() {
                log::warn!("speech synthesis not supported in this browser");
            }
            Self {
                synth,
                on_end: Rc::new(on_end),
                active: None,
            }
        }

        // the browser may still fire `end` for a cancelled utterance; unhook before the
        // closure is dropped
        fn detach(&mut self) {
            if let Some((utterance, _cb)) = self.active.take() {
                utterance.set_onend(None);
                utterance.set_onerror(None);
            }
        }
    }

    impl Synthesizer for BrowserSpeech {
        fn is_supported(&self) -> bool {
            self.synth.is_some()
        }

        fn speak(&mut self, id: UtteranceId, text: &str) -> Result<(), SpeechError> {
            self.detach();
            let synth = self.synth.as_ref().ok_or(SpeechError::Unavailable)?;
            let utterance = SpeechSynthesisUtterance::new_with_text(text)
                .map_err(|e| SpeechError::Rejected(format!("{e:?}")))?;
            utterance.set_rate(1.0);
            utterance.set_pitch(1.0);
            let on_end = self.on_end.clone();
            let cb = Closure::<dyn FnMut()>::new(move || on_end(id));
            utterance.set_onend(Some(cb.as_ref().unchecked_ref()));
            utterance.set_onerror(Some(cb.as_ref().unchecked_ref()));
            synth.speak(&utterance);
            self.active = Some((utterance, cb));
            Ok(())
        }

        fn cancel(&mut self) {
            self.detach();
            if let Some(synth) = &self.synth {
                synth.cancel();
            }
        }
    }

    impl Drop for BrowserSpeech {
        fn drop(&mut self) {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSynth {
        unsupported: bool,
        speaking: Vec<UtteranceId>,
        max_concurrent: usize,
        cancels: usize,
    }

    impl Synthesizer for FakeSynth {
        fn is_supported(&self) -> bool {
            !self.unsupported
        }

        fn speak(&mut self, utterance: UtteranceId, _text: &str) -> Result<(), SpeechError> {
            self.speaking.push(utterance);
            self.max_concurrent = self.max_concurrent.max(self.speaking.len());
            Ok(())
        }

        fn cancel(&mut self) {
            self.cancels += 1;
            self.speaking.clear();
        }
    }

    fn toggle() -> SpeechToggle<FakeSynth> {
        SpeechToggle::new(FakeSynth::default(), "Hello there")
    }

    #[test]
    fn test_toggle_on_then_off_cancels() {
        let mut t = toggle();
        assert_eq!(t.toggle(), Ok(true));
        assert!(t.is_speaking());
        assert_eq!(t.synth().speaking.len(), 1);
        assert_eq!(t.toggle(), Ok(false));
        assert!(!t.is_speaking());
        assert!(t.synth().speaking.is_empty());
    }

    #[test]
    fn test_never_two_concurrent_utterances() {
        let mut t = toggle();
        for _ in 0..6 {
            t.toggle().unwrap();
        }
        t.start().unwrap();
        t.start().unwrap();
        assert_eq!(t.synth().max_concurrent, 1);
    }

    #[test]
    fn test_stale_end_event_is_ignored() {
        let mut t = toggle();
        let first = t.start().unwrap();
        let second = t.start().unwrap();
        assert!(!t.finished(first));
        assert!(t.is_speaking());
        assert!(t.finished(second));
        assert!(!t.is_speaking());
    }

    #[test]
    fn test_end_event_after_toggle_off() {
        let mut t = toggle();
        let id = t.start().unwrap();
        t.toggle().unwrap();
        assert!(!t.finished(id));
        assert_eq!(t.toggle(), Ok(true));
    }

    #[test]
    fn test_stop_when_idle_does_not_cancel() {
        let mut t = toggle();
        t.stop();
        assert_eq!(t.synth().cancels, 0);
    }

    #[test]
    fn test_unsupported() {
        let synth = FakeSynth {
            unsupported: true,
            ..Default::default()
        };
        let mut t = SpeechToggle::new(synth, "hi");
        assert!(!t.is_supported());
        assert_eq!(t.toggle(), Err(SpeechError::Unavailable));
        assert!(!t.is_speaking());
    }
}
