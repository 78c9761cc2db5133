//! # Platform Collaborator Traits
//!
//! The seams where the embedding UI toolkit plugs into the engine. The
//! engine resolves values and pushes them through these traits; it never
//! creates, lays out or animates concrete elements itself.
//!
//! Implementations are expected to be thin adapters over the platform's
//! real label/button/bar types. The mock implementations in this crate's
//! tests show the complete contract.

use peniko::Color;

use crate::attributes::{AttributedString, TextAlignment, TextAttributes};
use crate::platform::BarStyle;
use crate::specifier::{AnimationSpecifier, ControlState, FontSpecifier};

/// A text label the engine can style.
pub trait ThemedLabel {
    /// Set the label's text (already case-transformed).
    fn set_text(&mut self, text: &str);
    /// Set the label's font.
    fn set_font(&mut self, font: &FontSpecifier);
    /// Set the label's text alignment.
    fn set_text_alignment(&mut self, alignment: TextAlignment);
    /// Set the maximum number of text lines.
    fn set_number_of_lines(&mut self, lines: i64);
    /// Set the text color.
    fn set_text_color(&mut self, color: Color);
    /// Set the background color behind the text.
    fn set_background_color(&mut self, color: Color);
    /// Shrink the label to fit its current text.
    fn size_to_fit(&mut self);
}

/// A button the engine can assign per-state attributed titles to.
pub trait ThemedButton {
    /// Set the attributed title for one control state.
    fn set_attributed_title(&mut self, title: AttributedString, state: ControlState);
}

/// A navigation bar the engine can style.
pub trait ThemedNavigationBar {
    /// Set the bar's tint (chrome background) color.
    fn set_bar_color(&mut self, color: Color);
    /// Set the bar's item tint color.
    fn set_tint_color(&mut self, color: Color);
    /// Set whether the bar is translucent.
    fn set_translucent(&mut self, translucent: bool);
    /// Set the bar's appearance style.
    fn set_bar_style(&mut self, style: BarStyle);
    /// Set the attributes used to render the bar title.
    fn set_title_attributes(&mut self, attributes: &TextAttributes);
    /// Set the attributes used to render bar-button items.
    ///
    /// `scope`, when present, names a container the styling is limited to;
    /// the bar implementation owns the actual filtering of which items
    /// match.
    fn set_button_attributes(&mut self, attributes: &TextAttributes, scope: Option<&str>);
}

/// The platform's animation executor.
///
/// The engine resolves an [AnimationSpecifier] and hands it over together
/// with the work to animate and a completion callback; scheduling and
/// interpolation are entirely the runner's concern.
pub trait AnimationRunner {
    /// Run `animations` with the given parameters, then call `completion`
    /// with whether the animation finished.
    fn animate(
        &self,
        specifier: &AnimationSpecifier,
        animations: Box<dyn FnOnce()>,
        completion: Box<dyn FnOnce(bool)>,
    );
}

/// The platform's asset system, resolving images by name.
pub trait ImageProvider {
    /// The platform image type.
    type Image;

    /// Look up an image by asset name.
    fn image_named(&self, name: &str) -> Option<Self::Image>;
}
