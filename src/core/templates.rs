//! Prompt templates for subcommands.
//!
//! Each command wraps the user's prompt in a structured brief and carries its
//! own default aspect ratio and size. Placeholders are `{user_prompt}`,
//! `{aspect}` and `{size}`.

use super::models::{AspectRatio, ImageSize};
use super::slide_templates::{self, SlideTemplate};

/// A subcommand with its prompt template and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub default_aspect: AspectRatio,
    pub default_size: ImageSize,
    /// Example prompt shown in `help <command>`.
    pub example: &'static str,
    pub template: &'static str,
}

impl Command {
    /// Wrap the user prompt in this command's template.
    #[must_use]
    pub fn apply(&self, user_prompt: &str, aspect: AspectRatio, size: ImageSize) -> String {
        // user_prompt last so braces typed by the user are left alone
        self.template
            .replace("{aspect}", aspect.as_str())
            .replace("{size}", size.as_str())
            .replace("{user_prompt}", user_prompt)
    }
}

/// Name of the command whose prompts may select a slide subtemplate.
pub const SLIDE_COMMAND: &str = "slide";

/// Registered commands, in help order.
pub static COMMANDS: &[Command] = &[
    Command {
        name: "dashboard",
        description: "KPI/analytics dashboard mockup (enterprise BI aesthetic)",
        default_aspect: AspectRatio::Widescreen16x9,
        default_size: ImageSize::TwoK,
        example: "SaaS metrics dashboard with MRR, churn rate, and user growth",
        template: r#"TASK
Create a KPI/analytics dashboard mockup — a single raster image showing an executive-ready data dashboard.

SOURCE MATERIAL
{user_prompt}

STYLE
- Enterprise BI aesthetic: clean white background, subtle grid, near-black text (#111)
- One accent color for highlights and key metrics
- No gradients, no 3D, no heavy shadows
- Typography readable at projector distance
- Use data visualization best practices: clear axis labels, legends, consistent color coding

LAYOUT
- Top bar: dashboard title, date range, filter pills
- KPI row: 3-5 large metric cards with sparklines and delta indicators
- Main area: 2-3 charts (line, bar, or area) arranged in a balanced grid
- Optional: data table or breakdown panel at bottom

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "moodboard",
        description: "Website/app moodboard for early design exploration (collage style)",
        default_aspect: AspectRatio::Square,
        default_size: ImageSize::TwoK,
        example: "fintech app targeting young professionals, trustworthy yet modern",
        template: r#"TASK
Create a design moodboard — a single raster image showing a curated collage of visual references for website or app design exploration.

SOURCE MATERIAL
{user_prompt}

STYLE
- Collage-style composition with overlapping elements and varied scales
- Mix of UI fragments, typography samples, color swatches, texture patches, and imagery
- Cohesive color palette tying all elements together
- Subtle drop shadows to separate overlapping layers
- Handpicked editorial feel, not random

LAYOUT
- Asymmetric grid with intentional white space
- Dominant hero image or UI fragment as focal point (~40% of area)
- Color palette strip along one edge (5-7 swatches with hex codes)
- Typography samples showing heading and body font pairings
- Scatter of supporting imagery, texture swatches, and UI component fragments

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "explore",
        description: "Render same concept in 4 style variations (4 quadrants)",
        default_aspect: AspectRatio::Square,
        default_size: ImageSize::TwoK,
        example: "landing page hero for a meditation app",
        template: r#"TASK
Create a design exploration sheet — a single raster image showing the same concept rendered in 4 distinct visual styles, arranged in a 2x2 grid.

SOURCE MATERIAL
{user_prompt}

STYLE
- Each quadrant renders the concept in a different visual treatment:
  - Top-left: Clean and minimal (flat design, limited palette)
  - Top-right: Rich and detailed (textured, layered, depth)
  - Bottom-left: Bold and graphic (strong contrast, geometric shapes)
  - Bottom-right: Soft and organic (rounded forms, gradients, natural tones)
- Consistent content across all four, only style changes
- Each quadrant labeled with its style name in small caption text

LAYOUT
- 2x2 grid with thin divider lines between quadrants
- Small header at top: concept title
- Each quadrant gets equal space
- Style label in bottom-left corner of each quadrant

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "wireframe",
        description: "UI wireframe or screen layout",
        default_aspect: AspectRatio::Widescreen16x9,
        default_size: ImageSize::TwoK,
        example: "settings page with account, notifications, and billing sections",
        template: r#"TASK
Create a UI wireframe — a single raster image showing a screen layout with clear component hierarchy and spatial arrangement.

SOURCE MATERIAL
{user_prompt}

STYLE
- Mid-fidelity wireframe: grayscale with one accent color for interactive elements
- Placeholder text shown as readable labels (not lorem ipsum)
- Clean lines, consistent spacing, visible grid alignment
- Component boundaries clearly defined with subtle borders
- Icons as simple recognizable outlines

LAYOUT
- Standard screen structure: navigation (top or side), content area, optional sidebar
- Component hierarchy clearly communicated through size and position
- Consistent padding and margins throughout
- Annotations or labels for key interactive elements where helpful

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "slide",
        description: "Presentation slide",
        default_aspect: AspectRatio::Widescreen16x9,
        default_size: ImageSize::TwoK,
        example: "Q4 revenue highlights: 40% YoY growth, 3 new enterprise clients",
        template: r#"TASK
Create a presentation slide — a single raster image suitable for a professional slide deck.

SOURCE MATERIAL
{user_prompt}

STYLE
- Executive-clean: white or dark background, minimal decoration
- Strong typographic hierarchy: large headline, supporting body text
- One accent color for emphasis and visual elements
- No clip art or stock photo aesthetic
- Data visualizations (if any) should be simple and readable at distance

LAYOUT
- Clear focal point — headline or key visual dominates
- Supporting text or data arranged with generous white space
- Visual elements (charts, diagrams, icons) balanced with text
- Bottom strip for source attribution or slide number if relevant

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "social",
        description: "Social media post image",
        default_aspect: AspectRatio::Square,
        default_size: ImageSize::TwoK,
        example: "product launch announcement for a new AI writing tool",
        template: r#"TASK
Create a social media post image — a single raster image optimized for engagement on social platforms.

SOURCE MATERIAL
{user_prompt}

STYLE
- Bold, scroll-stopping visual with high contrast
- Clean typography with large readable text
- Vibrant but cohesive color palette
- Modern graphic design aesthetic
- Minimal text — the image should communicate the message visually

LAYOUT
- Strong central visual or focal point
- Text overlay (if any) in high-contrast area with room to breathe
- Safe zones maintained for platform UI elements (profile pic overlay, like/comment buttons)
- Brand element (logo or watermark) subtle in corner if relevant

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "icon",
        description: "App icon",
        default_aspect: AspectRatio::Square,
        default_size: ImageSize::OneK,
        example: "podcast app with a microphone and sound waves",
        template: r#"TASK
Create an app icon — a single raster image showing a distinctive, recognizable icon suitable for app stores and home screens.

SOURCE MATERIAL
{user_prompt}

STYLE
- Simple, bold, instantly recognizable at small sizes
- Limited color palette (2-4 colors max)
- No text or at most a single letter/symbol
- Subtle depth through gradients or shadows (iOS/Android style)
- Clean geometric forms or a single distinctive glyph

LAYOUT
- Single centered symbol or glyph filling ~60-70% of the canvas
- Solid or gradient background
- Rounded-corner square format (standard app icon shape)
- No fine details that disappear at 64x64px

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "architecture",
        description: "System/cloud architecture diagram",
        default_aspect: AspectRatio::Widescreen16x9,
        default_size: ImageSize::TwoK,
        example: "microservices with API gateway, 3 services, Redis cache, and PostgreSQL",
        template: r#"TASK
Create a system architecture diagram — a single raster image showing components, services, and their connections in a technical system.

SOURCE MATERIAL
{user_prompt}

STYLE
- Technical diagram aesthetic: clean lines, consistent icon style
- Cloud/system icons in a flat or outlined style (AWS/GCP/Azure-inspired where relevant)
- Color-coded groups for different tiers or domains
- Clear directional arrows showing data flow or dependencies
- Labels on all components and connections

LAYOUT
- Left-to-right or top-to-bottom flow depending on complexity
- Components grouped by tier (clients, API layer, services, data stores)
- Groups enclosed in labeled dashed-line boundaries
- Legend in corner explaining color coding and arrow types
- Title at top with system name

OUTPUT RULES
- Single raster image
- {aspect} aspect ratio
- {size} resolution"#,
    },
    Command {
        name: "generate",
        description: "Free-form image generation (default behavior)",
        default_aspect: AspectRatio::Square,
        default_size: ImageSize::OneK,
        example: "a cute cat sitting on a windowsill",
        template: r#"{user_prompt}"#,
    },
];

/// Look up a command by name.
#[must_use]
pub fn get_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Template chosen for a prompt after two-level dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTemplate {
    /// Generic command template.
    Command(&'static Command),
    /// Slide subtemplate selected by the first prompt word.
    Slide(&'static SlideTemplate),
}

impl ResolvedTemplate {
    /// Render the final prompt text.
    #[must_use]
    pub fn apply(&self, user_prompt: &str, aspect: AspectRatio, size: ImageSize) -> String {
        match self {
            Self::Command(cmd) => cmd.apply(user_prompt, aspect, size),
            Self::Slide(tmpl) => tmpl.apply(user_prompt, size),
        }
    }

    /// Short label for progress output, e.g. `slide/funnel`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Command(cmd) => cmd.name.to_string(),
            Self::Slide(tmpl) => format!("{SLIDE_COMMAND}/{}", tmpl.name),
        }
    }
}

/// Pick the template for `command` and strip a consumed subtemplate word.
///
/// Under `slide`, a first prompt word naming a slide subtemplate selects it and
/// is removed from `words`. Every other command, and `slide` without a
/// matching word, uses the command's own template.
pub fn resolve_template(command: &'static Command, words: &mut Vec<String>) -> ResolvedTemplate {
    if command.name == SLIDE_COMMAND {
        if let Some(tmpl) = words
            .first()
            .and_then(|word| slide_templates::get_slide_template(word))
        {
            words.remove(0);
            return ResolvedTemplate::Slide(tmpl);
        }
    }
    ResolvedTemplate::Command(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "quarterly {numbers} for ACME";

    fn assert_formats(cmd: &Command) {
        let out = cmd.apply(PROMPT, AspectRatio::Widescreen16x9, ImageSize::FourK);
        assert!(out.contains(PROMPT), "{} lost the prompt", cmd.name);
        for placeholder in ["{user_prompt}", "{aspect}", "{size}"] {
            assert!(!out.contains(placeholder), "{} left {placeholder}", cmd.name);
        }
        if cmd.name != "generate" {
            assert!(out.contains("16:9 aspect ratio"), "{} dropped aspect", cmd.name);
            assert!(out.contains("4K resolution"), "{} dropped size", cmd.name);
        }
    }

    #[test]
    fn dashboard_template_formats() {
        assert_formats(get_command("dashboard").unwrap());
    }

    #[test]
    fn moodboard_template_formats() {
        assert_formats(get_command("moodboard").unwrap());
    }

    #[test]
    fn explore_template_formats() {
        assert_formats(get_command("explore").unwrap());
    }

    #[test]
    fn wireframe_template_formats() {
        assert_formats(get_command("wireframe").unwrap());
    }

    #[test]
    fn slide_template_formats() {
        assert_formats(get_command("slide").unwrap());
    }

    #[test]
    fn social_template_formats() {
        assert_formats(get_command("social").unwrap());
    }

    #[test]
    fn icon_template_formats() {
        assert_formats(get_command("icon").unwrap());
    }

    #[test]
    fn architecture_template_formats() {
        assert_formats(get_command("architecture").unwrap());
    }

    #[test]
    fn generate_template_is_passthrough() {
        let cmd = get_command("generate").unwrap();
        assert_formats(cmd);
        assert_eq!(
            cmd.apply("a cute cat", AspectRatio::Square, ImageSize::OneK),
            "a cute cat"
        );
    }

    #[test]
    fn registry_has_nine_unique_commands() {
        assert_eq!(COMMANDS.len(), 9);
        let mut names: Vec<_> = COMMANDS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn command_defaults() {
        let dashboard = get_command("dashboard").unwrap();
        assert_eq!(dashboard.default_aspect, AspectRatio::Widescreen16x9);
        assert_eq!(dashboard.default_size, ImageSize::TwoK);

        let icon = get_command("icon").unwrap();
        assert_eq!(icon.default_aspect, AspectRatio::Square);
        assert_eq!(icon.default_size, ImageSize::OneK);
    }

    #[test]
    fn unknown_command_is_none() {
        assert!(get_command("poster").is_none());
        assert!(get_command("").is_none());
    }

    #[test]
    fn slide_with_subtemplate_word_consumes_it() {
        let slide = get_command(SLIDE_COMMAND).unwrap();
        let mut words = vec!["funnel".to_string(), "our".to_string(), "funnel".to_string()];
        let resolved = resolve_template(slide, &mut words);

        assert_eq!(resolved.label(), "slide/funnel");
        assert_eq!(words, vec!["our", "funnel"]);
        let out = resolved.apply("our funnel", AspectRatio::Square, ImageSize::TwoK);
        assert!(out.contains("Funnel Diagnostic"));
        assert!(out.contains("2K resolution"));
    }

    #[test]
    fn slide_without_subtemplate_uses_generic_template() {
        let slide = get_command(SLIDE_COMMAND).unwrap();
        let mut words = vec!["Q4".to_string(), "revenue".to_string()];
        let resolved = resolve_template(slide, &mut words);

        assert_eq!(resolved, ResolvedTemplate::Command(slide));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn subtemplate_word_ignored_outside_slide() {
        let dashboard = get_command("dashboard").unwrap();
        let mut words = vec!["funnel".to_string(), "metrics".to_string()];
        let resolved = resolve_template(dashboard, &mut words);

        assert_eq!(resolved.label(), "dashboard");
        assert_eq!(words.len(), 2);
    }
}
