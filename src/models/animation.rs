use crate::models::bezier::Bezier;
use crate::models::style::{BaseStyle, Style};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sentinel curve name selecting the compositor's built-in easing
pub const DEFAULT_CURVE: &str = "default";

/// Animation targets recognised in `animation = NAME, ...` declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimationName {
    Windows,
    WindowsIn,
    WindowsOut,
    WindowsMove,
    Layers,
    LayersIn,
    LayersOut,
    Fade,
    FadeIn,
    FadeOut,
    FadeSwitch,
    FadeShadow,
    FadeDim,
    FadeLayers,
    FadeLayersIn,
    FadeLayersOut,
    Border,
    BorderAngle,
    Workspaces,
    WorkspacesIn,
    WorkspacesOut,
    SpecialWorkspace,
    SpecialWorkspaceIn,
    SpecialWorkspaceOut,
}

impl AnimationName {
    pub const ALL: [AnimationName; 24] = [
        AnimationName::Windows,
        AnimationName::WindowsIn,
        AnimationName::WindowsOut,
        AnimationName::WindowsMove,
        AnimationName::Layers,
        AnimationName::LayersIn,
        AnimationName::LayersOut,
        AnimationName::Fade,
        AnimationName::FadeIn,
        AnimationName::FadeOut,
        AnimationName::FadeSwitch,
        AnimationName::FadeShadow,
        AnimationName::FadeDim,
        AnimationName::FadeLayers,
        AnimationName::FadeLayersIn,
        AnimationName::FadeLayersOut,
        AnimationName::Border,
        AnimationName::BorderAngle,
        AnimationName::Workspaces,
        AnimationName::WorkspacesIn,
        AnimationName::WorkspacesOut,
        AnimationName::SpecialWorkspace,
        AnimationName::SpecialWorkspaceIn,
        AnimationName::SpecialWorkspaceOut,
    ];

    /// Identifier as written in the configuration file
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationName::Windows => "windows",
            AnimationName::WindowsIn => "windowsIn",
            AnimationName::WindowsOut => "windowsOut",
            AnimationName::WindowsMove => "windowsMove",
            AnimationName::Layers => "layers",
            AnimationName::LayersIn => "layersIn",
            AnimationName::LayersOut => "layersOut",
            AnimationName::Fade => "fade",
            AnimationName::FadeIn => "fadeIn",
            AnimationName::FadeOut => "fadeOut",
            AnimationName::FadeSwitch => "fadeSwitch",
            AnimationName::FadeShadow => "fadeShadow",
            AnimationName::FadeDim => "fadeDim",
            AnimationName::FadeLayers => "fadeLayers",
            AnimationName::FadeLayersIn => "fadeLayersIn",
            AnimationName::FadeLayersOut => "fadeLayersOut",
            AnimationName::Border => "border",
            AnimationName::BorderAngle => "borderangle",
            AnimationName::Workspaces => "workspaces",
            AnimationName::WorkspacesIn => "workspacesIn",
            AnimationName::WorkspacesOut => "workspacesOut",
            AnimationName::SpecialWorkspace => "specialWorkspace",
            AnimationName::SpecialWorkspaceIn => "specialWorkspaceIn",
            AnimationName::SpecialWorkspaceOut => "specialWorkspaceOut",
        }
    }

    pub fn group(self) -> AnimationGroup {
        use AnimationName::*;

        match self {
            Windows | WindowsIn | WindowsOut | WindowsMove => AnimationGroup::Windows,
            Layers | LayersIn | LayersOut => AnimationGroup::Layers,
            Workspaces | WorkspacesIn | WorkspacesOut | SpecialWorkspace | SpecialWorkspaceIn
            | SpecialWorkspaceOut => AnimationGroup::Workspaces,
            BorderAngle => AnimationGroup::BorderAngle,
            Fade | FadeIn | FadeOut | FadeSwitch | FadeShadow | FadeDim | FadeLayers
            | FadeLayersIn | FadeLayersOut | Border => AnimationGroup::NoStyle,
        }
    }

    pub fn allowed_styles(self) -> &'static [BaseStyle] {
        self.group().allowed_styles()
    }

    pub fn accepts_style(self, style: BaseStyle) -> bool {
        self.allowed_styles().contains(&style)
    }
}

impl FromStr for AnimationName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Invalid animation name: {}", s))
    }
}

impl fmt::Display for AnimationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AnimationName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const WINDOW_STYLES: &[BaseStyle] = &[BaseStyle::Slide, BaseStyle::Popin, BaseStyle::Gnomed];
const LAYER_STYLES: &[BaseStyle] = &[BaseStyle::Slide, BaseStyle::Popin, BaseStyle::Fade];
const WORKSPACE_STYLES: &[BaseStyle] = &[
    BaseStyle::Slide,
    BaseStyle::SlideVert,
    BaseStyle::Fade,
    BaseStyle::SlideFade,
    BaseStyle::SlideFadeVert,
];
const BORDER_ANGLE_STYLES: &[BaseStyle] = &[BaseStyle::Once, BaseStyle::Loop];

/// Animation families sharing one set of permitted styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationGroup {
    Windows,
    Layers,
    Workspaces,
    BorderAngle,
    /// Fade family and `border`; no style may be given
    NoStyle,
}

impl AnimationGroup {
    pub const ALL: [AnimationGroup; 5] = [
        AnimationGroup::Windows,
        AnimationGroup::Layers,
        AnimationGroup::Workspaces,
        AnimationGroup::BorderAngle,
        AnimationGroup::NoStyle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationGroup::Windows => "windows",
            AnimationGroup::Layers => "layers",
            AnimationGroup::Workspaces => "workspaces",
            AnimationGroup::BorderAngle => "borderangle",
            AnimationGroup::NoStyle => "no-style",
        }
    }

    pub fn allowed_styles(self) -> &'static [BaseStyle] {
        match self {
            AnimationGroup::Windows => WINDOW_STYLES,
            AnimationGroup::Layers => LAYER_STYLES,
            AnimationGroup::Workspaces => WORKSPACE_STYLES,
            AnimationGroup::BorderAngle => BORDER_ANGLE_STYLES,
            AnimationGroup::NoStyle => &[],
        }
    }

    pub fn members(self) -> impl Iterator<Item = AnimationName> {
        AnimationName::ALL
            .into_iter()
            .filter(move |name| name.group() == self)
    }
}

impl FromStr for AnimationGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid animation group: {}", s))
    }
}

impl fmt::Display for AnimationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AnimationGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Easing used by an enabled animation
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// The `default` sentinel
    Default,
    /// Copy of a bezier declared earlier in the file
    Bezier(Bezier),
}

impl Curve {
    pub fn name(&self) -> &str {
        match self {
            Curve::Default => DEFAULT_CURVE,
            Curve::Bezier(bezier) => &bezier.name,
        }
    }
}

impl Serialize for Curve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Curve::Default => serializer.serialize_str(DEFAULT_CURVE),
            Curve::Bezier(bezier) => bezier.serialize(serializer),
        }
    }
}

/// On/off state of an animation; only enabled animations carry settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AnimationState {
    Disabled,
    Enabled {
        /// Duration in deciseconds
        speed: u32,
        curve: Curve,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<Style>,
    },
}

/// One `animation = ...` declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationEntry {
    pub name: AnimationName,
    #[serde(flatten)]
    pub state: AnimationState,
}

impl AnimationEntry {
    pub fn disabled(name: AnimationName) -> Self {
        Self {
            name,
            state: AnimationState::Disabled,
        }
    }

    pub fn enabled(name: AnimationName, speed: u32, curve: Curve, style: Option<Style>) -> Self {
        Self {
            name,
            state: AnimationState::Enabled { speed, curve, style },
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, AnimationState::Enabled { .. })
    }

    pub fn speed(&self) -> Option<u32> {
        match &self.state {
            AnimationState::Enabled { speed, .. } => Some(*speed),
            AnimationState::Disabled => None,
        }
    }

    pub fn curve(&self) -> Option<&Curve> {
        match &self.state {
            AnimationState::Enabled { curve, .. } => Some(curve),
            AnimationState::Disabled => None,
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match &self.state {
            AnimationState::Enabled { style, .. } => style.as_ref(),
            AnimationState::Disabled => None,
        }
    }
}
