//! Control panel UI: one button per command plus the hint lines
//!
//! Buttons only ever emit `ControlInput`. Greying out, labels and hint
//! colours are all derived from the `ControlPanel` resource.

use crate::core::settings::PANEL_WIDTH;
use crate::core::state::Command;
use crate::systems::commands::{BusSet, ControlInput};
use crate::ui::panes::control_panel::ControlPanel;
use crate::ui::theme::*;
use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy)]
pub struct ControlButton(pub Command);

/// Marks the text inside a control button
#[derive(Component, Debug, Clone, Copy)]
pub struct ControlButtonLabel(pub Command);

/// The hint lines under the buttons
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelText {
    PointCount,
    FirstPoint,
    SecondPoint,
    Path,
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_control_panel)
            .add_systems(
                Update,
                handle_control_buttons.in_set(BusSet::Input),
            )
            .add_systems(
                Update,
                (update_button_appearance, update_panel_text)
                    .after(BusSet::Feedback),
            );
    }
}

fn button_text(command: Command, panel: &ControlPanel) -> String {
    match command {
        Command::CreatePoints => "Create points".to_string(),
        Command::DrawPolygon => "Draw polygon".to_string(),
        Command::ChooseFirstPoint => "First point".to_string(),
        Command::ChooseSecondPoint => "Second point".to_string(),
        Command::ToggleDirection => panel.direction_label().to_string(),
        Command::Clear => "Clear".to_string(),
    }
}

pub fn spawn_control_panel(mut commands: Commands, panel: Res<ControlPanel>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                right: Val::Px(0.0),
                width: Val::Px(PANEL_WIDTH),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(PANEL_PADDING)),
                row_gap: Val::Px(PANEL_ROW_GAP),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND_COLOR),
        ))
        .with_children(|parent| {
            for command in Command::ALL {
                spawn_control_button(parent, command, &panel);
            }
            for line in [
                PanelText::PointCount,
                PanelText::FirstPoint,
                PanelText::SecondPoint,
                PanelText::Path,
            ] {
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: HINT_TEXT_FONT_SIZE,
                        ..default()
                    },
                    TextColor(HINT_TEXT_COLOR),
                    line,
                ));
            }
        });
}

fn spawn_control_button(
    parent: &mut ChildSpawnerCommands,
    command: Command,
    panel: &ControlPanel,
) {
    parent
        .spawn((
            Button,
            ControlButton(command),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(BUTTON_HEIGHT),
                border: UiRect::all(Val::Px(BUTTON_BORDER_WIDTH)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderColor(NORMAL_BUTTON_OUTLINE_COLOR),
            BorderRadius::all(Val::Px(BUTTON_BORDER_RADIUS)),
            BackgroundColor(NORMAL_BUTTON),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(button_text(command, panel)),
                TextFont {
                    font_size: BUTTON_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(BUTTON_TEXT_COLOR),
                ControlButtonLabel(command),
            ));
        });
}

/// Turns presses on enabled buttons into `ControlInput`
fn handle_control_buttons(
    buttons: Query<(&Interaction, &ControlButton), Changed<Interaction>>,
    panel: Res<ControlPanel>,
    mut inputs: EventWriter<ControlInput>,
) {
    for (interaction, ControlButton(command)) in &buttons {
        if *interaction == Interaction::Pressed && panel.is_enabled(*command) {
            inputs.write(ControlInput(*command));
        }
    }
}

fn update_button_appearance(
    mut buttons: Query<(
        &Interaction,
        &ControlButton,
        &mut BackgroundColor,
        &mut BorderColor,
    )>,
    mut labels: Query<(&ControlButtonLabel, &mut Text, &mut TextColor)>,
    panel: Res<ControlPanel>,
) {
    for (interaction, ControlButton(command), mut color, mut border) in
        &mut buttons
    {
        let (fill, outline) = match (panel.is_enabled(*command), *interaction) {
            (false, _) => (DISABLED_BUTTON, DISABLED_BUTTON_OUTLINE_COLOR),
            (true, Interaction::Pressed) => {
                (PRESSED_BUTTON, PRESSED_BUTTON_OUTLINE_COLOR)
            }
            (true, Interaction::Hovered) => {
                (HOVERED_BUTTON, HOVERED_BUTTON_OUTLINE_COLOR)
            }
            (true, Interaction::None) => {
                (NORMAL_BUTTON, NORMAL_BUTTON_OUTLINE_COLOR)
            }
        };
        *color = fill.into();
        border.0 = outline;
    }

    if !panel.is_changed() {
        return;
    }
    for (ControlButtonLabel(command), mut text, mut text_color) in &mut labels {
        text.0 = button_text(*command, &panel);
        text_color.0 = if panel.is_enabled(*command) {
            BUTTON_TEXT_COLOR
        } else {
            DISABLED_TEXT_COLOR
        };
    }
}

fn update_panel_text(
    mut lines: Query<(&PanelText, &mut Text, &mut TextColor)>,
    panel: Res<ControlPanel>,
) {
    if !panel.is_changed() {
        return;
    }

    for (line, mut text, mut color) in &mut lines {
        match line {
            PanelText::PointCount => {
                text.0 = panel.point_count_hint();
                color.0 = if panel.point_count_valid() {
                    HINT_VALID_COLOR
                } else {
                    HINT_INVALID_COLOR
                };
            }
            PanelText::FirstPoint => {
                text.0 = format!("First point: {}", panel.first_point_hint());
            }
            PanelText::SecondPoint => {
                text.0 = format!("Second point: {}", panel.second_point_hint());
            }
            PanelText::Path => {
                text.0 = format!("Path: {}", panel.path_label());
            }
        }
    }
}
