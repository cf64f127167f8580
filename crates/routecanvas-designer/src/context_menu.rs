//! Model of the right-click menu offered over a selection.

use crate::compensation::CompensationMenuState;
use crate::model::{CutSide, Point};
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    InvertSelection,
    DisableSelection,
    EnableSelection,
    SwitchDirection,
    /// Re-root the selected closed shapes near the point the menu opened at.
    SetNearestStartPoint(Point),
    Compensation(CutSide),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
    /// `Some` for checkable entries.
    pub checked: Option<bool>,
}

impl MenuEntry {
    fn plain(label: &'static str, action: MenuAction) -> Self {
        Self {
            label,
            action,
            checked: None,
        }
    }

    fn checkable(label: &'static str, action: MenuAction, checked: bool) -> Self {
        Self {
            label,
            action,
            checked: Some(checked),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    Entry(MenuEntry),
    Separator,
    Submenu {
        label: &'static str,
        entries: Vec<MenuEntry>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub position: Point,
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Builds the menu for a right click at `position`.
    ///
    /// Returns `None` when nothing is selected. The compensation submenu is
    /// left out for machines without side compensation.
    pub fn build(scene: &Scene, position: Point) -> Option<Self> {
        if scene.selected_count() == 0 {
            return None;
        }

        let mut items = vec![
            MenuItem::Entry(MenuEntry::plain(
                "Invert Selection",
                MenuAction::InvertSelection,
            )),
            MenuItem::Entry(MenuEntry::plain(
                "Disable Selection",
                MenuAction::DisableSelection,
            )),
            MenuItem::Entry(MenuEntry::plain(
                "Enable Selection",
                MenuAction::EnableSelection,
            )),
            MenuItem::Separator,
            MenuItem::Entry(MenuEntry::plain(
                "Switch Direction",
                MenuAction::SwitchDirection,
            )),
            MenuItem::Entry(MenuEntry::plain(
                "Set Nearest StartPoint",
                MenuAction::SetNearestStartPoint(position),
            )),
        ];

        if scene.compensation_available() {
            let state = CompensationMenuState::from(scene.compensation_consensus());
            items.push(MenuItem::Separator);
            items.push(MenuItem::Submenu {
                label: "Cutter Compensation",
                entries: vec![
                    MenuEntry::checkable(
                        "G40 No Compensation",
                        MenuAction::Compensation(CutSide::None),
                        state.none,
                    ),
                    MenuEntry::checkable(
                        "G41 Left Compensation",
                        MenuAction::Compensation(CutSide::Left),
                        state.left,
                    ),
                    MenuEntry::checkable(
                        "G42 Right Compensation",
                        MenuAction::Compensation(CutSide::Right),
                        state.right,
                    ),
                ],
            });
        }

        Some(Self { position, items })
    }

    /// All actions reachable from the menu, submenus flattened.
    pub fn actions(&self) -> Vec<MenuAction> {
        let mut actions = Vec::new();
        for item in &self.items {
            match item {
                MenuItem::Entry(entry) => actions.push(entry.action),
                MenuItem::Submenu { entries, .. } => {
                    actions.extend(entries.iter().map(|e| e.action))
                }
                MenuItem::Separator => {}
            }
        }
        actions
    }

    /// Entries of the named submenu, if present.
    pub fn submenu(&self, label: &str) -> Option<&[MenuEntry]> {
        self.items.iter().find_map(|item| match item {
            MenuItem::Submenu { label: l, entries } if *l == label => Some(entries.as_slice()),
            _ => None,
        })
    }
}
