// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// lexrank-ffi: C-compatible FFI layer for the lexrank Engine.
//
// Memory management rules:
// - Opaque `LexrankEngine` pointer: created by `lexrank_new`, freed by `lexrank_free`.
// - Error strings returned through `error_out`: caller must free with `lexrank_free_str`.
// - Buffers passed to sink callbacks are valid only for the duration of the callback.
// - Words are arrays of Unicode scalar values (UTF-32), not NUL-terminated.

use std::ffi::{CStr, CString, c_char, c_int, c_uint, c_void};
use std::ptr;
use std::slice;

use lexrank_core::{FormTag, Options, StatusCode};
use lexrank_engine::{Engine, OutputSink, TableAnalyzer};

/// Opaque engine handle.
pub struct LexrankEngine {
    engine: Engine,
}

/// Receives one exact lemma. `forms` holds `forms_len` raw form tags.
pub type LexrankLemmaFn = unsafe extern "C" fn(
    ctx: *mut c_void,
    lexeme_id: u32,
    weight: f32,
    forms: *const u8,
    forms_len: usize,
);

/// Receives one fuzzy stem: the first `stem_len` scalars of the lowercased `word`.
pub type LexrankStemFn = unsafe extern "C" fn(
    ctx: *mut c_void,
    word: *const u32,
    word_len: usize,
    stem_len: usize,
    word_class: u32,
    weight: f32,
    forms: *const u8,
    forms_len: usize,
);

/// Caller-supplied output sink. `ctx` is passed back to every callback.
#[repr(C)]
pub struct LexrankSink {
    pub ctx: *mut c_void,
    pub add_lemma: Option<LexrankLemmaFn>,
    pub add_stem: Option<LexrankStemFn>,
}

// ── Engine lifecycle ─────────────────────────────────────────────

/// Create an engine from an analyzer table given as a UTF-8 JSON string.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `lexrank_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lexrank_new(
    table_json: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut LexrankEngine {
    let Some(json) = cstr_to_str(table_json) else {
        set_error(error_out, "table_json is null or not valid UTF-8");
        return ptr::null_mut();
    };

    match TableAnalyzer::from_json_str(json) {
        Ok(table) => Box::into_raw(Box::new(LexrankEngine {
            engine: Engine::from_table(table),
        })),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free an engine created by `lexrank_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lexrank_free(engine: *mut LexrankEngine) {
    if !engine.is_null() {
        drop(unsafe { Box::from_raw(engine) });
    }
}

// ── Processing ──────────────────────────────────────────────────

/// Rank lemmas and/or select stems for `word[0..word_len]`.
///
/// `options` is a bit set: 1 = exact lemmas, 2 = fuzzy stems. Unknown bits
/// are ignored. Returns 0 on success, 22 when the engine, the sink, either
/// sink callback, or the word is unusable (including invalid code points),
/// and 75 when the word is too long to lowercase.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lexrank_process(
    engine: *const LexrankEngine,
    sink: *const LexrankSink,
    options: c_uint,
    word: *const u32,
    word_len: usize,
) -> c_int {
    let invalid = StatusCode::InvalidArgument.code();

    let Some(handle) = (unsafe { engine.as_ref() }) else { return invalid; };
    let Some(sink) = (unsafe { sink.as_ref() }) else { return invalid; };
    let (Some(add_lemma), Some(add_stem)) = (sink.add_lemma, sink.add_stem) else {
        return invalid;
    };

    let chars = if word_len == 0 {
        Vec::new()
    } else if word.is_null() {
        return invalid;
    } else {
        let scalars = unsafe { slice::from_raw_parts(word, word_len) };
        match scalars.iter().map(|&u| char::from_u32(u)).collect::<Option<Vec<char>>>() {
            Some(chars) => chars,
            None => {
                tracing::debug!("word contains an invalid code point");
                return invalid;
            }
        }
    };

    let mut adapter = CallbackSink {
        ctx: sink.ctx,
        add_lemma,
        add_stem,
        scalars: Vec::new(),
        tags: Vec::new(),
    };
    handle
        .engine
        .process_status(
            Some(&mut adapter),
            Options::from_bits_truncate(options),
            Some(&chars),
            chars.len(),
        )
        .code()
}

// ── Memory management ───────────────────────────────────────────

/// Free a C string returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lexrank_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

/// Forwards engine emissions to the C callbacks.
struct CallbackSink {
    ctx: *mut c_void,
    add_lemma: LexrankLemmaFn,
    add_stem: LexrankStemFn,
    scalars: Vec<u32>,
    tags: Vec<u8>,
}

impl CallbackSink {
    fn fill_tags(&mut self, forms: &[FormTag]) {
        self.tags.clear();
        self.tags.extend(forms.iter().map(|t| t.raw()));
    }
}

impl OutputSink for CallbackSink {
    fn add_lemma(&mut self, lexeme_id: u32, weight: f32, forms: &[FormTag]) {
        self.fill_tags(forms);
        unsafe {
            (self.add_lemma)(self.ctx, lexeme_id, weight, self.tags.as_ptr(), self.tags.len());
        }
    }

    fn add_stem(
        &mut self,
        word: &[char],
        stem_len: usize,
        word_class: u32,
        weight: f32,
        forms: &[FormTag],
    ) {
        self.fill_tags(forms);
        self.scalars.clear();
        self.scalars.extend(word.iter().map(|&c| u32::from(c)));
        unsafe {
            (self.add_stem)(
                self.ctx,
                self.scalars.as_ptr(),
                self.scalars.len(),
                stem_len,
                word_class,
                weight,
                self.tags.as_ptr(),
                self.tags.len(),
            );
        }
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = CString::new(msg).unwrap_or_default().into_raw();
        }
    }
}
