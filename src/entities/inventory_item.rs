//! Closed set of household inventory items a booking can list.
//!
//! Stored as short string codes so a products row holds only the items that
//! were actually filled in.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(40))")]
pub enum InventoryItem {
    #[sea_orm(string_value = "single_sofa")]
    #[serde(rename = "single_sofa")]
    SingleSofa,
    #[sea_orm(string_value = "double_sofa")]
    #[serde(rename = "double_sofa")]
    DoubleSofa,
    #[sea_orm(string_value = "three_seater")]
    #[serde(rename = "three_seater")]
    ThreeSeater,
    #[sea_orm(string_value = "four_seater")]
    #[serde(rename = "four_seater")]
    FourSeater,
    #[sea_orm(string_value = "five_seater")]
    #[serde(rename = "five_seater")]
    FiveSeater,
    #[sea_orm(string_value = "six_seater")]
    #[serde(rename = "six_seater")]
    SixSeater,
    #[sea_orm(string_value = "recliner")]
    #[serde(rename = "recliner")]
    Recliner,
    #[sea_orm(string_value = "single_bed_storage")]
    #[serde(rename = "single_bed_storage")]
    SingleBedStorage,
    #[sea_orm(string_value = "single_bed_dismantlable")]
    #[serde(rename = "single_bed_dismantlable")]
    SingleBedDismantlable,
    #[sea_orm(string_value = "double_bed_storage")]
    #[serde(rename = "double_bed_storage")]
    DoubleBedStorage,
    #[sea_orm(string_value = "double_bed_dismantlable")]
    #[serde(rename = "double_bed_dismantlable")]
    DoubleBedDismantlable,
    #[sea_orm(string_value = "bunk_bed_dismantlable")]
    #[serde(rename = "bunk_bed_dismantlable")]
    BunkBedDismantlable,
    #[sea_orm(string_value = "folding_cot_dismantlable")]
    #[serde(rename = "folding_cot_dismantlable")]
    FoldingCotDismantlable,
    #[sea_orm(string_value = "single_mattress_foldable")]
    #[serde(rename = "single_mattress_foldable")]
    SingleMattressFoldable,
    #[sea_orm(string_value = "single_mattress_non_foldable")]
    #[serde(rename = "single_mattress_non_foldable")]
    SingleMattressNonFoldable,
    #[sea_orm(string_value = "double_mattress_foldable")]
    #[serde(rename = "double_mattress_foldable")]
    DoubleMattressFoldable,
    #[sea_orm(string_value = "double_mattress_non_foldable")]
    #[serde(rename = "double_mattress_non_foldable")]
    DoubleMattressNonFoldable,
    #[sea_orm(string_value = "dining_table_chairs")]
    #[serde(rename = "dining_table_chairs")]
    DiningTableChairs,
    #[sea_orm(string_value = "baby_chair")]
    #[serde(rename = "baby_chair")]
    BabyChair,
    #[sea_orm(string_value = "rocking_chair")]
    #[serde(rename = "rocking_chair")]
    RockingChair,
    #[sea_orm(string_value = "plastic_folding_chair")]
    #[serde(rename = "plastic_folding_chair")]
    PlasticFoldingChair,
    #[sea_orm(string_value = "office_chair")]
    #[serde(rename = "office_chair")]
    OfficeChair,
    #[sea_orm(string_value = "bed_side_table")]
    #[serde(rename = "bed_side_table")]
    BedSideTable,
    #[sea_orm(string_value = "dressing_table")]
    #[serde(rename = "dressing_table")]
    DressingTable,
    #[sea_orm(string_value = "study_or_computer_table")]
    #[serde(rename = "study_or_computer_table")]
    StudyOrComputerTable,
    #[sea_orm(string_value = "center_table")]
    #[serde(rename = "center_table")]
    CenterTable,
    #[sea_orm(string_value = "dining_table")]
    #[serde(rename = "dining_table")]
    DiningTable,
    #[sea_orm(string_value = "teapoy")]
    #[serde(rename = "teapoy")]
    Teapoy,
    #[sea_orm(string_value = "tv_stand")]
    #[serde(rename = "tv_stand")]
    TvStand,
    #[sea_orm(string_value = "book_shelf")]
    #[serde(rename = "book_shelf")]
    BookShelf,
    #[sea_orm(string_value = "mirror")]
    #[serde(rename = "mirror")]
    Mirror,
    #[sea_orm(string_value = "shoe_rack")]
    #[serde(rename = "shoe_rack")]
    ShoeRack,
    #[sea_orm(string_value = "mandir")]
    #[serde(rename = "mandir")]
    Mandir,
    #[sea_orm(string_value = "iron_trunk_chest")]
    #[serde(rename = "iron_trunk_chest")]
    IronTrunkChest,
    #[sea_orm(string_value = "tv_up_to_20")]
    #[serde(rename = "tv_up_to_20")]
    TvUpTo20,
    #[sea_orm(string_value = "tv_29_to_43")]
    #[serde(rename = "tv_29_to_43")]
    Tv29To43,
    #[sea_orm(string_value = "tv_49_to_55")]
    #[serde(rename = "tv_49_to_55")]
    Tv49To55,
    #[sea_orm(string_value = "tv_above_55")]
    #[serde(rename = "tv_above_55")]
    TvAbove55,
    #[sea_orm(string_value = "home_theater")]
    #[serde(rename = "home_theater")]
    HomeTheater,
    #[sea_orm(string_value = "inverter_ups")]
    #[serde(rename = "inverter_ups")]
    InverterUps,
    #[sea_orm(string_value = "ac_split")]
    #[serde(rename = "ac_split")]
    AcSplit,
    #[sea_orm(string_value = "ac_window")]
    #[serde(rename = "ac_window")]
    AcWindow,
    #[sea_orm(string_value = "cooler")]
    #[serde(rename = "cooler")]
    Cooler,
    #[sea_orm(string_value = "ceiling_fan")]
    #[serde(rename = "ceiling_fan")]
    CeilingFan,
    #[sea_orm(string_value = "table_fan")]
    #[serde(rename = "table_fan")]
    TableFan,
    #[sea_orm(string_value = "exhaust_fan")]
    #[serde(rename = "exhaust_fan")]
    ExhaustFan,
    #[sea_orm(string_value = "mini_fridge")]
    #[serde(rename = "mini_fridge")]
    MiniFridge,
    #[sea_orm(string_value = "small_fridge")]
    #[serde(rename = "small_fridge")]
    SmallFridge,
    #[sea_orm(string_value = "medium_fridge")]
    #[serde(rename = "medium_fridge")]
    MediumFridge,
    #[sea_orm(string_value = "large_fridge")]
    #[serde(rename = "large_fridge")]
    LargeFridge,
    #[sea_orm(string_value = "large_fridge_above_450_ltrs")]
    #[serde(rename = "large_fridge_above_450_ltrs")]
    LargeFridgeAbove450Ltrs,
    #[sea_orm(string_value = "washing_machine")]
    #[serde(rename = "washing_machine")]
    WashingMachine,
    #[sea_orm(string_value = "geyser")]
    #[serde(rename = "geyser")]
    Geyser,
    #[sea_orm(string_value = "sewing_machine")]
    #[serde(rename = "sewing_machine")]
    SewingMachine,
    #[sea_orm(string_value = "vacuum_cleaner")]
    #[serde(rename = "vacuum_cleaner")]
    VacuumCleaner,
    #[sea_orm(string_value = "gas_stove")]
    #[serde(rename = "gas_stove")]
    GasStove,
    #[sea_orm(string_value = "water_purifier")]
    #[serde(rename = "water_purifier")]
    WaterPurifier,
    #[sea_orm(string_value = "microwave_otg")]
    #[serde(rename = "microwave_otg")]
    MicrowaveOtg,
    #[sea_orm(string_value = "chimney")]
    #[serde(rename = "chimney")]
    Chimney,
    #[sea_orm(string_value = "dish_washer")]
    #[serde(rename = "dish_washer")]
    DishWasher,
    #[sea_orm(string_value = "gas_cylinder")]
    #[serde(rename = "gas_cylinder")]
    GasCylinder,
    #[sea_orm(string_value = "bath_tub")]
    #[serde(rename = "bath_tub")]
    BathTub,
    #[sea_orm(string_value = "lamp")]
    #[serde(rename = "lamp")]
    Lamp,
    #[sea_orm(string_value = "plants")]
    #[serde(rename = "plants")]
    Plants,
    #[sea_orm(string_value = "iron_board")]
    #[serde(rename = "iron_board")]
    IronBoard,
    #[sea_orm(string_value = "dish_antenna")]
    #[serde(rename = "dish_antenna")]
    DishAntenna,
    #[sea_orm(string_value = "treadmill")]
    #[serde(rename = "treadmill")]
    Treadmill,
    #[sea_orm(string_value = "piano_guitar")]
    #[serde(rename = "piano_guitar")]
    PianoGuitar,
    #[sea_orm(string_value = "service_carton_box")]
    #[serde(rename = "service_carton_box")]
    ServiceCartonBox,
    #[sea_orm(string_value = "self_carton_box")]
    #[serde(rename = "self_carton_box")]
    SelfCartonBox,
    #[sea_orm(string_value = "gunny_bags")]
    #[serde(rename = "gunny_bags")]
    GunnyBags,
}

/// Grouping used when presenting the checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Seating,
    Beds,
    Furniture,
    Electronics,
    Appliances,
    Kitchen,
    Miscellaneous,
    Packing,
}

impl InventoryItem {
    /// The code stored in the database, e.g. `"single_sofa"`.
    pub fn code(&self) -> String {
        self.to_value()
    }

    /// Parse a stored or submitted item code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::try_from_value(&code.to_string()).ok()
    }

    pub fn category(&self) -> ItemCategory {
        use InventoryItem::*;
        match self {
            SingleSofa
            | DoubleSofa
            | ThreeSeater
            | FourSeater
            | FiveSeater
            | SixSeater
            | Recliner
            | DiningTableChairs
            | BabyChair
            | RockingChair
            | PlasticFoldingChair
            | OfficeChair => ItemCategory::Seating,
            SingleBedStorage
            | SingleBedDismantlable
            | DoubleBedStorage
            | DoubleBedDismantlable
            | BunkBedDismantlable
            | FoldingCotDismantlable
            | SingleMattressFoldable
            | SingleMattressNonFoldable
            | DoubleMattressFoldable
            | DoubleMattressNonFoldable => ItemCategory::Beds,
            BedSideTable
            | DressingTable
            | StudyOrComputerTable
            | CenterTable
            | DiningTable
            | Teapoy
            | TvStand
            | BookShelf
            | Mirror
            | ShoeRack
            | Mandir
            | IronTrunkChest => ItemCategory::Furniture,
            TvUpTo20
            | Tv29To43
            | Tv49To55
            | TvAbove55
            | HomeTheater
            | InverterUps => ItemCategory::Electronics,
            AcSplit
            | AcWindow
            | Cooler
            | CeilingFan
            | TableFan
            | ExhaustFan
            | MiniFridge
            | SmallFridge
            | MediumFridge
            | LargeFridge
            | LargeFridgeAbove450Ltrs
            | WashingMachine
            | Geyser
            | SewingMachine
            | VacuumCleaner => ItemCategory::Appliances,
            GasStove
            | WaterPurifier
            | MicrowaveOtg
            | Chimney
            | DishWasher
            | GasCylinder => ItemCategory::Kitchen,
            BathTub
            | Lamp
            | Plants
            | IronBoard
            | DishAntenna
            | Treadmill
            | PianoGuitar => ItemCategory::Miscellaneous,
            ServiceCartonBox
            | SelfCartonBox
            | GunnyBags => ItemCategory::Packing,
        }
    }
}

impl std::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use sea_orm::Iterable;

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for item in InventoryItem::iter() {
            let code = item.code();
            assert!(code.len() <= 40, "code too long: {}", code);
            assert!(seen.insert(code.clone()), "duplicate code: {}", code);
            assert_eq!(InventoryItem::from_code(&code), Some(item));
        }
        assert_eq!(seen.len(), 71);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(InventoryItem::from_code("spaceship"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(InventoryItem::SingleSofa.category(), ItemCategory::Seating);
        assert_eq!(InventoryItem::DoubleMattressFoldable.category(), ItemCategory::Beds);
        assert_eq!(InventoryItem::Tv29To43.category(), ItemCategory::Electronics);
        assert_eq!(InventoryItem::GasCylinder.category(), ItemCategory::Kitchen);
        assert_eq!(InventoryItem::GunnyBags.category(), ItemCategory::Packing);
    }
}
