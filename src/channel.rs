/// One of the three physical ADC inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Battery terminal, behind a resistive divider.
    Battery,
    /// Solar panel output, behind a resistive divider.
    SolarPanel,
    /// Main system supply rail.
    Vsys,
}

impl Channel {
    /// Every channel, in scan slot order.
    pub const ALL: [Channel; 3] = [Channel::Battery, Channel::SolarPanel, Channel::Vsys];

    /// Slot of this channel in a scan of [`Channel::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Channel::Battery => 0,
            Channel::SolarPanel => 1,
            Channel::Vsys => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Channel::Battery => "battery",
            Channel::SolarPanel => "solar_panel",
            Channel::Vsys => "vsys",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_scan_order() {
        for (slot, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), slot);
        }
    }
}
