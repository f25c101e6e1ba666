//! Hit-dice expressions (`NdM`, `NdM+K`, `NdM-K`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_DICE_COUNT, MAX_DICE_SIDES};
use crate::error::DiceError;
use crate::rng::GameRng;

/// Hit-dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HitDice {
    pub count: u32,
    pub sides: u32,
    pub bonus: i32,
}

impl HitDice {
    pub const fn new(count: u32, sides: u32, bonus: i32) -> Self {
        Self {
            count,
            sides,
            bonus,
        }
    }

    /// Roll the dice and add the bonus, saturating at the `i32` limits
    pub fn roll(&self, rng: &mut GameRng) -> i32 {
        let total = i64::from(rng.dice(self.count, self.sides)) + i64::from(self.bonus);
        i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
    }

    /// Check the dice against the accepted limits
    pub fn check(&self) -> Result<(), DiceError> {
        if self.count == 0 || self.sides == 0 {
            return Err(DiceError::Empty(self.to_string()));
        }
        if self.count > MAX_DICE_COUNT || self.sides > MAX_DICE_SIDES {
            return Err(DiceError::TooLarge {
                expr: self.to_string(),
                max_count: MAX_DICE_COUNT,
                max_sides: MAX_DICE_SIDES,
            });
        }
        Ok(())
    }
}

impl FromStr for HitDice {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = s.trim();
        let (count, rest) = expr
            .split_once(['d', 'D'])
            .ok_or_else(|| DiceError::MissingSeparator(expr.to_string()))?;

        let (sides, bonus) = match rest.find(['+', '-']) {
            Some(i) => (&rest[..i], Some(&rest[i..])),
            None => (rest, None),
        };

        let number = |part: &str| {
            part.trim().parse::<u32>().map_err(|_| DiceError::InvalidNumber {
                expr: expr.to_string(),
                part: part.to_string(),
            })
        };
        let count = number(count)?;
        let sides = number(sides)?;
        let bonus = match bonus {
            Some(b) => b
                .trim_start_matches('+')
                .parse::<i32>()
                .map_err(|_| DiceError::InvalidNumber {
                    expr: expr.to_string(),
                    part: b.to_string(),
                })?,
            None => 0,
        };

        let dice = Self::new(count, sides, bonus);
        dice.check()?;
        Ok(dice)
    }
}

impl TryFrom<String> for HitDice {
    type Error = DiceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HitDice> for String {
    fn from(dice: HitDice) -> Self {
        dice.to_string()
    }
}

impl fmt::Display for HitDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.bonus {
            0 => Ok(()),
            b if b > 0 => write!(f, "+{b}"),
            b => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!("2d6".parse(), Ok(HitDice::new(2, 6, 0)));
        assert_eq!(" 1d4 ".parse(), Ok(HitDice::new(1, 4, 0)));
    }

    #[test]
    fn test_parse_bonus() {
        assert_eq!("10d12+40".parse(), Ok(HitDice::new(10, 12, 40)));
        assert_eq!("3d8-2".parse(), Ok(HitDice::new(3, 8, -2)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "12".parse::<HitDice>(),
            Err(DiceError::MissingSeparator(_))
        ));
        assert!(matches!(
            "xd6".parse::<HitDice>(),
            Err(DiceError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "2d6+".parse::<HitDice>(),
            Err(DiceError::InvalidNumber { .. })
        ));
        assert!(matches!("0d6".parse::<HitDice>(), Err(DiceError::Empty(_))));
        assert!(matches!("2d0".parse::<HitDice>(), Err(DiceError::Empty(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(HitDice::new(10, 12, 40).to_string(), "10d12+40");
        assert_eq!(HitDice::new(3, 8, -2).to_string(), "3d8-2");
        assert_eq!(HitDice::new(2, 6, 0).to_string(), "2d6");
    }

    #[test]
    fn test_roll_bounds() {
        let mut rng = GameRng::new(42);
        let dice = HitDice::new(10, 12, 40);
        for _ in 0..500 {
            let hp = dice.roll(&mut rng);
            assert!((50..=160).contains(&hp));
        }
    }

    #[test]
    fn test_oversized_dice_rejected() {
        assert!(matches!(
            "1000000000d100".parse::<HitDice>(),
            Err(DiceError::TooLarge { .. })
        ));
        assert!(matches!(
            "2d5000".parse::<HitDice>(),
            Err(DiceError::TooLarge { .. })
        ));
        assert!("1000d1000".parse::<HitDice>().is_ok());
    }

    #[test]
    fn test_roll_saturates() {
        let mut rng = GameRng::new(1);
        assert_eq!(HitDice::new(3, 1, i32::MAX).roll(&mut rng), i32::MAX);
        assert_eq!(HitDice::new(1, 1, i32::MIN).roll(&mut rng), i32::MIN + 1);
    }

    #[test]
    fn test_serde_as_string() {
        let dice: HitDice = serde_json::from_str("\"2d8+2\"").unwrap();
        assert_eq!(dice, HitDice::new(2, 8, 2));
        assert_eq!(serde_json::to_string(&dice).unwrap(), "\"2d8+2\"");
        assert!(serde_json::from_str::<HitDice>("\"banana\"").is_err());
    }
}
