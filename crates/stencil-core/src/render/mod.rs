//! Template rendering engine
//!
//! Directive syntax, all matching `{<tag>:<payload>}`:
//! - `{v:path}` - substitute the scalar at `path`
//! - `{r:text}` - emit `text` verbatim
//! - `{i:file}` - render another template file in place
//! - `{l:pattern[]}...{l:end}` - repeat the body per collection element
//! - `{e:path literal}...{e:end}` - body only when the value equals the literal
//! - `{m:path regex}...{m:end}` - body only when the value matches in full
//! - `{x:path}...{x:end}` - body only when the path resolves
//! - `{n:path}...{n:end}` - body only when the path does not resolve
//! - `{f:name,args}` - built-in function call
//!
//! The engine builds no syntax tree. It scans the template into a flat
//! directive list, then interprets it with a cursor pair (directive index,
//! text offset): loops jump the cursor backward to replay their body,
//! skipped blocks jump it forward past their end marker. Inside a loop body,
//! paths are relative to the current element unless escaped with `$`.

mod blocks;
mod frames;
mod functions;
mod include;
mod resolve;
mod scan;

#[cfg(test)]
mod tests;

use std::env;
use std::path::Path;

use regex::Regex;
use serde_json::Value;

use crate::error::{Result, StencilError};
use crate::json;

use blocks::skip_to_matching_end;
use frames::{advance_frame, Advance, LoopFrame};
use functions::eval_function;
use include::load_include;
use resolve::resolve_path;

pub use scan::{scan_directives, Directive, DirectiveKind};

/// Default cap on include nesting
const DEFAULT_INCLUDE_DEPTH: usize = 16;

/// Rendering knobs
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Fail on malformed directive arguments instead of rendering them empty
    pub strict: bool,
    /// Upper bound on include nesting, guarding against include cycles
    pub max_include_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_include_depth: DEFAULT_INCLUDE_DEPTH,
        }
    }
}

/// Template renderer
///
/// Holds only options; every call to [`Renderer::render`] starts from a
/// fresh evaluation state, so one renderer can be reused across templates.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

/// Per-invocation interpreter state
///
/// `index` and `offset` form the cursor: the next directive to interpret and
/// the byte position the next literal run starts from. Includes get their own
/// context; only `depth` carries over.
struct RenderContext<'a> {
    template: &'a str,
    doc: &'a Value,
    base_dir: &'a Path,
    depth: usize,
    directives: Vec<Directive>,
    frames: Vec<LoopFrame>,
    index: usize,
    offset: usize,
    output: String,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a template against a values document
    ///
    /// `base_dir` anchors relative `{i:...}` references.
    pub fn render(&self, template: &str, doc: &Value, base_dir: &Path) -> Result<String> {
        self.render_at_depth(template, doc, base_dir, 0)
    }

    fn render_at_depth(
        &self,
        template: &str,
        doc: &Value,
        base_dir: &Path,
        depth: usize,
    ) -> Result<String> {
        if depth > self.options.max_include_depth {
            return Err(StencilError::IncludeDepth {
                limit: self.options.max_include_depth,
            });
        }
        let mut ctx = RenderContext {
            template,
            doc,
            base_dir,
            depth,
            directives: scan_directives(template),
            frames: Vec::new(),
            index: 0,
            offset: 0,
            output: String::new(),
        };
        self.run(&mut ctx)?;
        Ok(ctx.output)
    }

    fn run(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        while ctx.index < ctx.directives.len() {
            let directive = ctx.directives[ctx.index].clone();
            ctx.output.push_str(&ctx.template[ctx.offset..directive.start]);
            ctx.offset = directive.end();
            self.dispatch(ctx, &directive)?;
        }
        if let Some(frame) = ctx.frames.first() {
            // a loop start whose end marker never showed up
            let start = frame.start_directive_index - 1;
            return Err(StencilError::UnmatchedEnd {
                tag: DirectiveKind::Loop.tag(),
                index: start,
                offset: ctx.directives[start].start,
            });
        }
        ctx.output.push_str(&ctx.template[ctx.offset..]);
        Ok(())
    }

    fn dispatch(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        match directive.kind {
            DirectiveKind::Variable => self.handle_variable(ctx, directive),
            DirectiveKind::Raw => self.handle_raw(ctx, directive),
            DirectiveKind::Function => self.handle_function(ctx, directive),
            DirectiveKind::Include => self.handle_include(ctx, directive),
            DirectiveKind::Loop => self.handle_loop(ctx, directive),
            DirectiveKind::Equals => self.handle_equals(ctx, directive),
            DirectiveKind::Regex => self.handle_regex(ctx, directive),
            DirectiveKind::Exists => self.handle_exists(ctx, directive),
            DirectiveKind::NotExists => self.handle_not_exists(ctx, directive),
        }
    }

    /// `{v:path}`: emit the scalar, or nothing when absent or non-scalar
    fn handle_variable(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        let path = resolve_path(&directive.payload, &ctx.frames);
        if let Some(text) = json::scalar_at(ctx.doc, &path) {
            ctx.output.push_str(&text);
        }
        ctx.index += 1;
        Ok(())
    }

    /// `{r:text}`: emit the payload untouched, including any spacing
    fn handle_raw(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        ctx.output.push_str(&directive.payload);
        ctx.index += 1;
        Ok(())
    }

    fn handle_function(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        match eval_function(&directive.payload, ctx.doc, &ctx.frames) {
            Some(text) => ctx.output.push_str(&text),
            None => self.malformed(directive)?,
        }
        ctx.index += 1;
        Ok(())
    }

    /// `{i:file}`: render the referenced template in place
    ///
    /// The included template sees the sub-document the enclosing frames point
    /// at (the whole document outside loops) and resolves its own includes
    /// relative to its own directory.
    fn handle_include(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        let (text, next_base) = load_include(ctx.base_dir, directive.payload.trim())?;
        let sub_path = resolve_path("", &ctx.frames);
        let rendered = match json::node_at(ctx.doc, &sub_path) {
            Some(sub_doc) => self.render_at_depth(&text, sub_doc, &next_base, ctx.depth + 1)?,
            None => self.render_at_depth(&text, &Value::Null, &next_base, ctx.depth + 1)?,
        };
        ctx.output.push_str(&rendered);
        ctx.index += 1;
        Ok(())
    }

    fn handle_loop(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        if directive.is_end_marker() {
            match advance_frame(&mut ctx.frames) {
                Advance::Continue {
                    directive_index,
                    text_offset,
                } => {
                    ctx.index = directive_index;
                    ctx.offset = text_offset;
                }
                Advance::Exit => ctx.index += 1,
            }
            return Ok(());
        }

        let pattern = resolve_path(&directive.payload, &ctx.frames);
        if wildcard_count(&pattern) != 1 {
            self.malformed(directive)?;
            return self.skip_block(ctx, directive);
        }
        let length = json::enumerate_nodes(ctx.doc, &pattern).len();
        if length == 0 {
            return self.skip_block(ctx, directive);
        }
        ctx.frames.push(LoopFrame {
            list_path: pattern,
            index: 0,
            length,
            start_directive_index: ctx.index + 1,
            start_text_offset: ctx.offset,
        });
        ctx.index += 1;
        Ok(())
    }

    fn handle_equals(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        if directive.is_end_marker() {
            ctx.index += 1;
            return Ok(());
        }
        let tokens: Vec<&str> = directive.payload.split_whitespace().collect();
        if tokens.len() != 2 {
            self.malformed(directive)?;
            ctx.index += 1;
            return Ok(());
        }
        let value = json::scalar_at(ctx.doc, &resolve_path(tokens[0], &ctx.frames));
        if value.as_deref() == Some(tokens[1]) {
            ctx.index += 1;
            Ok(())
        } else {
            self.skip_block(ctx, directive)
        }
    }

    fn handle_regex(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        if directive.is_end_marker() {
            ctx.index += 1;
            return Ok(());
        }
        let tokens: Vec<&str> = directive.payload.split_whitespace().collect();
        if tokens.len() != 2 {
            self.malformed(directive)?;
            ctx.index += 1;
            return Ok(());
        }
        // anchored on both sides: the value must match in full
        let pattern =
            Regex::new(&format!("^(?:{})$", tokens[1])).map_err(|err| StencilError::InvalidRegex {
                pattern: tokens[1].to_string(),
                reason: err.to_string(),
            })?;
        let value =
            json::scalar_at(ctx.doc, &resolve_path(tokens[0], &ctx.frames)).unwrap_or_default();
        if pattern.is_match(&value) {
            ctx.index += 1;
            Ok(())
        } else {
            self.skip_block(ctx, directive)
        }
    }

    fn handle_exists(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        if directive.is_end_marker() {
            ctx.index += 1;
            return Ok(());
        }
        let path = resolve_path(&directive.payload, &ctx.frames);
        if json::exists(ctx.doc, &path) {
            ctx.index += 1;
            Ok(())
        } else {
            self.skip_block(ctx, directive)
        }
    }

    /// `{n:path}` renders its body when the path is absent; with a literal
    /// argument, when the value differs from the literal
    fn handle_not_exists(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        if directive.is_end_marker() {
            ctx.index += 1;
            return Ok(());
        }
        let tokens: Vec<&str> = directive.payload.split_whitespace().collect();
        let suppressed = match tokens.as_slice() {
            [path] => json::exists(ctx.doc, &resolve_path(path, &ctx.frames)),
            [path, literal] => {
                json::scalar_at(ctx.doc, &resolve_path(path, &ctx.frames)).as_deref()
                    == Some(*literal)
            }
            _ => {
                self.malformed(directive)?;
                ctx.index += 1;
                return Ok(());
            }
        };
        if suppressed {
            self.skip_block(ctx, directive)
        } else {
            ctx.index += 1;
            Ok(())
        }
    }

    /// Jump the cursor past the end marker of a block whose body is skipped
    fn skip_block(&self, ctx: &mut RenderContext<'_>, directive: &Directive) -> Result<()> {
        let Some(end) = skip_to_matching_end(&ctx.directives, directive.kind, ctx.index) else {
            return Err(StencilError::UnmatchedEnd {
                tag: directive.kind.tag(),
                index: ctx.index,
                offset: directive.start,
            });
        };
        ctx.offset = ctx.directives[end].end();
        ctx.index = end + 1;
        Ok(())
    }

    /// Strict mode turns a malformed payload into an error; otherwise the
    /// directive renders as nothing
    fn malformed(&self, directive: &Directive) -> Result<()> {
        if self.options.strict {
            return Err(StencilError::BadDirectiveArgs {
                tag: directive.kind.tag(),
                payload: directive.payload.trim().to_string(),
            });
        }
        Ok(())
    }
}

fn wildcard_count(pattern: &str) -> usize {
    json::path::parse(pattern)
        .iter()
        .filter(|s| matches!(s, json::path::Segment::Wildcard))
        .count()
}

/// Render with default options, resolving includes against the current
/// working directory
pub fn render(template: &str, doc: &Value) -> Result<String> {
    let base_dir = env::current_dir()?;
    Renderer::default().render(template, doc, &base_dir)
}

/// Parse a JSON text and render against it
pub fn render_str(template: &str, values_json: &str) -> Result<String> {
    let doc: Value = serde_json::from_str(values_json)?;
    render(template, &doc)
}
