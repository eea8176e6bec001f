#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Welcome,
    RefreshDevices,
    Suspend,
    FirstSlot,
    SlotProgress,
    Resume,
    Overwrite,
    Delete,
}

/// One walkthrough step, anchored to the part of the interface it explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    /// What the step points at: a subcommand name, or `""` for free-standing
    /// steps.
    pub anchor: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Builds the step list for one run. The refresh-devices step is included
/// only when no active playback device was present at tour start.
#[must_use]
pub fn build_steps(active_device_present: bool) -> Vec<Step> {
    let mut steps = vec![Step {
        id: StepId::Welcome,
        anchor: "",
        title: "Welcome to Cassette!",
        text: "This short introduction shows how to park and resume playback \
               sessions. Skip it any time if you prefer to find out yourself.",
    }];

    if !active_device_present {
        steps.push(Step {
            id: StepId::RefreshDevices,
            anchor: "devices",
            title: "Refresh active devices",
            text: "There is no active device right now. Make sure your player \
                   is currently playing (and not in offline mode), then check \
                   again with 'devices'. Mobile apps sometimes need a \
                   pause/unpause to show up.",
        });
    }

    steps.push(Step {
        id: StepId::Suspend,
        anchor: "suspend",
        title: "Suspend your current state",
        text: "Pause playback and store the current position in a new slot. \
               You can keep as many slots as you want, one per audiobook, \
               album, or playlist.",
    });
    steps.push(Step {
        id: StepId::FirstSlot,
        anchor: "list",
        title: "Your first slot",
        text: "A slot is a parked player state. It can be resumed, \
               overwritten, or removed.",
    });
    steps.push(Step {
        id: StepId::SlotProgress,
        anchor: "list",
        title: "Progress within a slot",
        text: "Each listed slot shows how far into the album or playlist it \
               is. Especially handy with audiobooks.",
    });
    steps.push(Step {
        id: StepId::Resume,
        anchor: "resume",
        title: "Restore a slot",
        text: "Resume playback from a slot on the active device, or pick one \
               with --device. Playback jumps back a few seconds to ease \
               getting back in.",
    });
    steps.push(Step {
        id: StepId::Overwrite,
        anchor: "overwrite",
        title: "Overwrite a slot",
        text: "Replace the state stored in a slot with whatever is playing \
               right now.",
    });
    steps.push(Step {
        id: StepId::Delete,
        anchor: "delete",
        title: "Remove a slot",
        text: "That is the end of the tour. Feel free to remove the test \
               slot. Have fun using Cassette!",
    });

    steps
}
