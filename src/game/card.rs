/// One of the eight colors a card can carry. The deck pairs each primary
/// with each secondary, so the two halves of a card never repeat a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    // primaries
    Blue,
    Yellow,
    Orange,
    Skyblue,
    // secondaries
    Red,
    Purple,
    Green,
    Brown,
}

/// The 16 card faces: every primary/secondary combination exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    BlueRed,
    BluePurple,
    BlueGreen,
    BlueBrown,

    YellowRed,
    YellowPurple,
    YellowGreen,
    YellowBrown,

    OrangeRed,
    OrangePurple,
    OrangeGreen,
    OrangeBrown,

    SkyblueRed,
    SkybluePurple,
    SkyblueGreen,
    SkyblueBrown,
}

impl CardKind {
    /// Every card face, one of each. A fresh board holds exactly this deck.
    pub const ALL: [CardKind; 16] = [
        CardKind::BlueRed,
        CardKind::BluePurple,
        CardKind::BlueGreen,
        CardKind::BlueBrown,
        CardKind::YellowRed,
        CardKind::YellowPurple,
        CardKind::YellowGreen,
        CardKind::YellowBrown,
        CardKind::OrangeRed,
        CardKind::OrangePurple,
        CardKind::OrangeGreen,
        CardKind::OrangeBrown,
        CardKind::SkyblueRed,
        CardKind::SkybluePurple,
        CardKind::SkyblueGreen,
        CardKind::SkyblueBrown,
    ];

    /// The (primary, secondary) color pair of this card face.
    pub fn colors(self) -> (CardColor, CardColor) {
        match self {
            CardKind::BlueRed => (CardColor::Blue, CardColor::Red),
            CardKind::BluePurple => (CardColor::Blue, CardColor::Purple),
            CardKind::BlueGreen => (CardColor::Blue, CardColor::Green),
            CardKind::BlueBrown => (CardColor::Blue, CardColor::Brown),
            CardKind::YellowRed => (CardColor::Yellow, CardColor::Red),
            CardKind::YellowPurple => (CardColor::Yellow, CardColor::Purple),
            CardKind::YellowGreen => (CardColor::Yellow, CardColor::Green),
            CardKind::YellowBrown => (CardColor::Yellow, CardColor::Brown),
            CardKind::OrangeRed => (CardColor::Orange, CardColor::Red),
            CardKind::OrangePurple => (CardColor::Orange, CardColor::Purple),
            CardKind::OrangeGreen => (CardColor::Orange, CardColor::Green),
            CardKind::OrangeBrown => (CardColor::Orange, CardColor::Brown),
            CardKind::SkyblueRed => (CardColor::Skyblue, CardColor::Red),
            CardKind::SkybluePurple => (CardColor::Skyblue, CardColor::Purple),
            CardKind::SkyblueGreen => (CardColor::Skyblue, CardColor::Green),
            CardKind::SkyblueBrown => (CardColor::Skyblue, CardColor::Brown),
        }
    }

    /// True iff any of the four pairings between the two cards' colors match.
    /// Symmetric and reflexive, but not transitive.
    pub fn shares_color(self, other: CardKind) -> bool {
        let (a1, a2) = self.colors();
        let (b1, b2) = other.colors();
        a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2
    }
}
