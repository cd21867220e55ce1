use strum::{Display, EnumIter, EnumString};

use crate::seed::Seed;

/// Tupper's own constant. Rasterizes to the formula itself
const CLASSIC: &str = "9609393799189588849716729621278527547150043396601293066515055192717028023952664246896428\
    4217435071812126715378277062335599323728087414430789132596394133772348785773574982392662\
    9715517173716995165232890538221612403238855866184013235585136048828693337902491454229288\
    6670810961844960917051834540678277315517054053816273809676025656250169814820834187831638\
    4911559022561000365235137034387446184837873723819822484986346503315941005497470059313833\
    9226497249461751545728366702369745461014655997933798537483143786841806593422227898388722\
    980000748404719";

// http://keelyhill.github.io/tuppers-formula/
const SICK: &str = "1999065810489599215990632836363810178766385141453775153947686550321828961818407653012337\
    6594191240423660240394984379186663022378035825460130463039263105132804681101931270959222\
    7631500979649931518795365589332244156816053373014059549452066117357397504861137579902513\
    4410945212875202300195186677923940665615142365896170930871710043668408288918926981340315\
    2930991277247967173513256539223797726955178170491373118698624325774883868451659687136319\
    4132734446186856151359947504947980655286675865714081044922472071253";

const DEV: &str = "9014848123123442023425633982651890889118066599151438669705363782917072964707262952345218\
    4379509519968786531529157086222240846588818382686147528115820391410535922842107662943514\
    0266456444744645974724781281181566226237897315410152161640979406541395768244890452855196\
    3587458483523719902094876815491049337973370101821252218903960833908866017428781093302061\
    8204779107609730139733444209152444083354067445681128839566703533349128277236144648362866\
    5118061585835543287989133880772541246449563356013313459668829792967128632509303954870986\
    85789959131264";

/// Well known seeds
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Preset {
    /// Tupper's original constant, 543 digits
    Classic,
    /// A hand drawn "sick" glyph set
    Sick,
    /// The developer's nickname
    Dev,
}

impl Preset {
    /// Returns the decimal literal of the preset
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Classic => CLASSIC,
            Self::Sick => SICK,
            Self::Dev => DEV,
        }
    }

    /// Returns the preset as a [`Seed`]
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn seed(self) -> Seed {
        self.literal()
            .parse()
            .expect("preset literals are plain decimal integers")
    }

    /// File name used when the preset is rendered to disk
    #[must_use]
    pub fn file_name(self) -> String {
        format!("tupper_{self}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use strum::IntoEnumIterator;

    #[test]
    fn presets_parse() {
        let digits: Vec<_> = Preset::iter().map(|p| p.seed().digits()).collect();
        assert_eq!(digits, vec![543, 507, 542]);
    }

    #[test]
    fn presets_are_aligned_to_slices() {
        for preset in Preset::iter() {
            assert!((preset.seed().as_biguint() % 17u32).is_zero(), "{preset}");
        }
    }

    #[test]
    fn names() {
        assert_eq!("classic".parse::<Preset>(), Ok(Preset::Classic));
        assert_eq!("DEV".parse::<Preset>(), Ok(Preset::Dev));
        assert!("tupper".parse::<Preset>().is_err());
        assert_eq!(Preset::Sick.file_name(), "tupper_sick.png");
    }
}
