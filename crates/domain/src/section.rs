//! Dashboard sections: the panels laid out by the dashboard shell.

/// A panel of the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Managed routers.
    Instances,
    /// Logical networks spanning several instances.
    ControllerNetworks,
    AddNetworks,
    Networks,
}

impl Section {
    /// Every section, in display order.
    pub const ALL: [Self; 4] = [
        Self::Instances,
        Self::ControllerNetworks,
        Self::AddNetworks,
        Self::Networks,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Instances => "Instances",
            Self::ControllerNetworks => "Controller Networks",
            Self::AddNetworks => "Add Networks",
            Self::Networks => "Networks",
        }
    }

    /// Fragment id used for in-page sidebar links.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Instances => "instances",
            Self::ControllerNetworks => "controller-networks",
            Self::AddNetworks => "add-networks",
            Self::Networks => "networks",
        }
    }

    /// Sections shown side by side in the overview row.
    #[must_use]
    pub fn is_overview(self) -> bool {
        matches!(self, Self::Instances | Self::ControllerNetworks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_sections_in_display_order() {
        let titles: Vec<_> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            ["Instances", "Controller Networks", "Add Networks", "Networks"]
        );
    }

    #[test]
    fn should_use_unique_anchors() {
        let mut anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn should_mark_instances_and_controller_networks_as_overview() {
        let overview: Vec<_> = Section::ALL.into_iter().filter(|s| s.is_overview()).collect();
        assert_eq!(overview, [Section::Instances, Section::ControllerNetworks]);
    }
}
