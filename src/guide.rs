//! # codecast guide
//!
//! This module is a standalone walkthrough of how a markdown document becomes a frame list.
//! It has no items; it exists for `cargo doc`.
//!
//! ---
//!
//! ## Authoring model
//!
//! A document is ordinary markdown. Code blocks become file revisions:
//!
//! ````text
//! ---
//! fps: 30
//! chars_per_second: 45
//! switch_file_pause_ms: 3500
//! ---
//!
//! ```ts filename=src/app.ts
//! const app = createApp();
//! ```
//!
//! ```ts highlight={2}
//! const app = createApp();
//! app.listen(3000);
//! ```
//! ````
//!
//! - `filename=<token>` starts (or resumes) a file. Blocks without it belong to the most
//!   recently named file; the document's first block must name one
//!   ([`CodecastError::MissingFilename`](crate::CodecastError::MissingFilename)).
//! - `highlight={2,4-6}` selects lines for the render surface to emphasize
//!   ([`parse_highlight_ranges`](crate::parse_highlight_ranges)). Bad tokens are dropped.
//! - A block named `_theme.css` is a stylesheet, not a file
//!   ([`THEME_SENTINEL`](crate::THEME_SENTINEL)).
//!
//! Each block is a *full snapshot* of the file, not a patch.
//!
//! ---
//!
//! ## Stages
//!
//! 1. [`parse_snippet`](crate::parse_snippet) groups blocks into
//!    [`FileBlock`](crate::FileBlock)s.
//! 2. [`build_timeline`](crate::build_timeline) emits one `switch-file` per file and one
//!    `insert-text` per revision. When a revision extends the previous one only the new
//!    suffix is inserted; otherwise the whole revision is.
//! 3. [`simulate_timeline`](crate::simulate_timeline) folds the events through
//!    [`apply_event`](crate::apply_event). Inserted text that starts with the current file
//!    text replaces it, anything else is appended on a new line.
//! 4. [`generate_typing_events`](crate::generate_typing_events) re-diffs consecutive
//!    snapshots and emits one `type-char` per new character.
//! 5. [`schedule_frames`](crate::schedule_frames) paces those characters and plays a
//!    transition on every switch.
//!
//! [`snippet_to_frames`](crate::snippet_to_frames) runs stages 2-5;
//! [`document_to_frames`](crate::document_to_frames) runs all of them and resolves
//! [`RenderSettings`](crate::RenderSettings) from the frontmatter.
//!
//! ### Rewrites append
//!
//! Stage 2 and stage 3 test for a prefix independently. A revision that rewrites earlier
//! text (`"ab"` then `"xyz"`) is inserted whole by stage 2, and stage 3 then appends it:
//! the file reads `"ab\nxyz"`. Likewise a plain suffix insert onto text without a trailing
//! newline gains a separator (`"ab"` then `"abc"` reads `"ab\nc"`). This is the defined
//! output for those inputs.
//!
//! ---
//!
//! ## Timing
//!
//! With `fps` and `chars_per_second` from [`SchedulerConfig`](crate::SchedulerConfig):
//!
//! - `frames_per_char = max(1, round(fps / cps))`: frames each visible increment is held.
//! - `chars_per_frame = max(1, round(cps / fps))`: consecutive same-file characters shown
//!   at once when typing outpaces the frame rate.
//!
//! A file switch plays a [`TransitionPlan`](crate::TransitionPlan):
//!
//! | phase    | frames                                      | progress      |
//! |----------|---------------------------------------------|---------------|
//! | reading  | `max(20% of budget, budget - fades)`        | `0`           |
//! | fade-out | `round(fps * 1.0)`                          | `0 -> 0.5`    |
//! | fade-in  | `round(fps * 0.5)`                          | `0.5 -> 1`    |
//!
//! where the budget is `round(switch_file_pause_ms / 1000 * fps)`. When a switch opens the
//! video, the first half of its reading phase is dropped. Outside transitions every frame has
//! `transition_progress == 1` and no `previous_file`.
//!
//! ---
//!
//! ## Determinism
//!
//! All maps are ordered and every frame owns a full copy of the document, so the output is
//! reproducible byte for byte: two runs over the same input compare equal frame by frame.
