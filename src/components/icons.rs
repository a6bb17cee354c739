//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Activity, LuArrowRight as ArrowRight, LuBrain as Brain, LuGlobe as Globe,
        LuMonitor as Monitor, LuMoon as Moon, LuPlay as Play, LuSearch as Search, LuShield as Shield,
        LuSun as Sun, LuX as Close, LuZap as Zap,
    };
}

mod bootstrap {
    pub use icondata::{
        BsActivity as Activity, BsArrowRight as ArrowRight, BsCpu as Brain, BsDisplay as Monitor,
        BsGlobe as Globe, BsLightning as Zap, BsMoon as Moon, BsPlayFill as Play,
        BsSearch as Search, BsShield as Shield, BsSun as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SHIELD, Shield);
themed_icon!(ZAP, Zap);
themed_icon!(BRAIN, Brain);
themed_icon!(GLOBE, Globe);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(PLAY, Play);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(MONITOR, Monitor);
themed_icon!(SEARCH, Search);
themed_icon!(ACTIVITY, Activity);
themed_icon!(CLOSE, Close);

#[cfg(test)]
mod tests {
    use super::*;

    /// Every exported icon comes from the configured theme's table.
    #[test]
    fn test_icons_follow_configured_theme() {
        let pairs: [(Icon, Icon, Icon); 12] = [
            (SHIELD, lucide::Shield, bootstrap::Shield),
            (ZAP, lucide::Zap, bootstrap::Zap),
            (BRAIN, lucide::Brain, bootstrap::Brain),
            (GLOBE, lucide::Globe, bootstrap::Globe),
            (ARROW_RIGHT, lucide::ArrowRight, bootstrap::ArrowRight),
            (PLAY, lucide::Play, bootstrap::Play),
            (SUN, lucide::Sun, bootstrap::Sun),
            (MOON, lucide::Moon, bootstrap::Moon),
            (MONITOR, lucide::Monitor, bootstrap::Monitor),
            (SEARCH, lucide::Search, bootstrap::Search),
            (ACTIVITY, lucide::Activity, bootstrap::Activity),
            (CLOSE, lucide::Close, bootstrap::Close),
        ];
        for (icon, lu, bs) in pairs {
            let expected = match crate::config::ICON_THEME {
                IconTheme::Lucide => lu,
                IconTheme::Bootstrap => bs,
            };
            assert_eq!(icon.data, expected.data);
        }
    }
}
