// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Battery packs and charging parameters for the fuel gauge.

use crate::device::{BatIdMethod, BatResVsTemp, BatteryData, BatteryTech, BatteryType, ResTemp, VoltageCapacity};

macro_rules! v_to_cap {
    ($($mv:expr => $cap:expr),* $(,)?) => {
        &[$(VoltageCapacity { voltage_mv: $mv, capacity: $cap }),*]
    };
}

/// NTC on the Samsung packs, resistance in ohm.
const SEMCO_NTC: &[ResTemp] = &[
    ResTemp { temp: -20, resist: 67_790 },
    ResTemp { temp: -15, resist: 53_460 },
    ResTemp { temp: -10, resist: 42_450 },
    ResTemp { temp: -5, resist: 33_930 },
    ResTemp { temp: 0, resist: 27_280 },
    ResTemp { temp: 5, resist: 22_070 },
    ResTemp { temp: 10, resist: 17_960 },
    ResTemp { temp: 15, resist: 14_700 },
    ResTemp { temp: 20, resist: 12_090 },
    ResTemp { temp: 25, resist: 10_000 },
    ResTemp { temp: 30, resist: 8_312 },
    ResTemp { temp: 35, resist: 6_942 },
    ResTemp { temp: 40, resist: 5_826 },
    ResTemp { temp: 45, resist: 4_911 },
    ResTemp { temp: 50, resist: 4_158 },
    ResTemp { temp: 55, resist: 3_536 },
    ResTemp { temp: 60, resist: 3_019 },
    ResTemp { temp: 65, resist: 2_588 },
];

/// Internal resistance in mohm, falling temperature.
const SEMCO_BATRES: &[BatResVsTemp] = &[
    BatResVsTemp { temp: 40, resist: 120 },
    BatResVsTemp { temp: 30, resist: 135 },
    BatResVsTemp { temp: 20, resist: 165 },
    BatResVsTemp { temp: 10, resist: 230 },
    BatResVsTemp { temp: 0, resist: 325 },
    BatResVsTemp { temp: -10, resist: 545 },
    BatResVsTemp { temp: -20, resist: 1_004 },
];

const EB425161LU_CAPACITY: &[VoltageCapacity] = v_to_cap![
    4_177 => 1000,
    4_130 => 960,
    4_080 => 910,
    4_030 => 856,
    3_985 => 804,
    3_942 => 750,
    3_900 => 698,
    3_864 => 645,
    3_830 => 591,
    3_801 => 537,
    3_777 => 484,
    3_757 => 430,
    3_741 => 376,
    3_727 => 323,
    3_710 => 269,
    3_686 => 215,
    3_657 => 162,
    3_620 => 108,
    3_579 => 54,
    3_545 => 27,
    3_400 => 0,
];

const EB535151VU_CAPACITY: &[VoltageCapacity] = v_to_cap![
    4_171 => 1000,
    4_114 => 950,
    4_066 => 900,
    4_020 => 850,
    3_976 => 800,
    3_935 => 750,
    3_897 => 700,
    3_861 => 650,
    3_827 => 600,
    3_797 => 550,
    3_772 => 500,
    3_752 => 450,
    3_737 => 400,
    3_723 => 350,
    3_708 => 300,
    3_688 => 250,
    3_663 => 200,
    3_631 => 150,
    3_592 => 100,
    3_547 => 50,
    3_400 => 0,
];

const EB_L1M7FLU_CAPACITY: &[VoltageCapacity] = v_to_cap![
    4_330 => 1000,
    4_240 => 940,
    4_160 => 880,
    4_090 => 820,
    4_020 => 760,
    3_960 => 700,
    3_910 => 640,
    3_860 => 580,
    3_820 => 520,
    3_790 => 460,
    3_770 => 400,
    3_750 => 340,
    3_730 => 280,
    3_710 => 220,
    3_680 => 160,
    3_640 => 100,
    3_580 => 50,
    3_400 => 0,
];

const UNKNOWN_CAPACITY: &[VoltageCapacity] = v_to_cap![
    4_186 => 1000,
    4_030 => 800,
    3_900 => 600,
    3_800 => 400,
    3_720 => 200,
    3_620 => 50,
    3_400 => 0,
];

/// Used when the id resistor matches no known pack.
const UNKNOWN_PACK: BatteryType = BatteryType {
    name: BatteryTech::Unknown,
    model: "unknown",
    resis_high: 0,
    resis_low: 0,
    charge_full_design: 612,
    nominal_voltage: 3_700,
    termination_vol: 4_050,
    termination_curr: 200,
    recharge_vol: 3_990,
    normal_cur_lvl: 400,
    normal_vol_lvl: 4_100,
    maint_a_cur_lvl: 400,
    maint_a_vol_lvl: 4_050,
    maint_a_chg_timer_h: 60,
    low_high_cur_lvl: 300,
    low_high_vol_lvl: 4_000,
    r_to_t_tbl: SEMCO_NTC,
    v_to_cap_tbl: UNKNOWN_CAPACITY,
    batres_tbl: SEMCO_BATRES,
};

pub const EB425161LU: BatteryType = BatteryType {
    name: BatteryTech::LiIon,
    model: "EB425161LU",
    resis_high: 70_000,
    resis_low: 8_000,
    charge_full_design: 1_500,
    nominal_voltage: 3_700,
    termination_vol: 4_200,
    termination_curr: 150,
    recharge_vol: 4_130,
    normal_cur_lvl: 900,
    normal_vol_lvl: 4_200,
    maint_a_cur_lvl: 600,
    maint_a_vol_lvl: 4_150,
    maint_a_chg_timer_h: 60,
    low_high_cur_lvl: 300,
    low_high_vol_lvl: 4_000,
    r_to_t_tbl: SEMCO_NTC,
    v_to_cap_tbl: EB425161LU_CAPACITY,
    batres_tbl: SEMCO_BATRES,
};

pub const EB535151VU: BatteryType = BatteryType {
    name: BatteryTech::LiIon,
    model: "EB535151VU",
    resis_high: 70_000,
    resis_low: 8_000,
    charge_full_design: 1_500,
    nominal_voltage: 3_700,
    termination_vol: 4_200,
    termination_curr: 150,
    recharge_vol: 4_130,
    normal_cur_lvl: 900,
    normal_vol_lvl: 4_200,
    maint_a_cur_lvl: 600,
    maint_a_vol_lvl: 4_150,
    maint_a_chg_timer_h: 60,
    low_high_cur_lvl: 300,
    low_high_vol_lvl: 4_000,
    r_to_t_tbl: SEMCO_NTC,
    v_to_cap_tbl: EB535151VU_CAPACITY,
    batres_tbl: SEMCO_BATRES,
};

/// 4.35 V high-voltage pack.
pub const EB_L1M7FLU: BatteryType = BatteryType {
    name: BatteryTech::LiIon,
    model: "EB-L1M7FLU",
    resis_high: 70_000,
    resis_low: 8_000,
    charge_full_design: 1_200,
    nominal_voltage: 3_800,
    termination_vol: 4_350,
    termination_curr: 120,
    recharge_vol: 4_280,
    normal_cur_lvl: 700,
    normal_vol_lvl: 4_350,
    maint_a_cur_lvl: 600,
    maint_a_vol_lvl: 4_300,
    maint_a_chg_timer_h: 60,
    low_high_cur_lvl: 300,
    low_high_vol_lvl: 4_000,
    r_to_t_tbl: SEMCO_NTC,
    v_to_cap_tbl: EB_L1M7FLU_CAPACITY,
    batres_tbl: SEMCO_BATRES,
};

const fn samsung_charging(bat_type: &'static [BatteryType]) -> BatteryData {
    BatteryData {
        temp_under: -5,
        temp_low: 0,
        temp_high: 40,
        temp_over: 60,
        main_safety_tmr_h: 4,
        usb_safety_tmr_h: 4,
        bkup_bat_v: 3_100,
        bkup_bat_i: 50,
        no_maintenance: true,
        chg_unknown_bat: true,
        enable_overshoot: false,
        fg_res: 100,
        adc_therm: BatIdMethod::BatTemp,
        interval_charging: 5,
        interval_not_charging: 120,
        bat_type,
    }
}

static EB425161LU_PACKS: [BatteryType; 2] = [UNKNOWN_PACK, EB425161LU];
static EB535151VU_PACKS: [BatteryType; 2] = [UNKNOWN_PACK, EB535151VU];
static EB_L1M7FLU_PACKS: [BatteryType; 2] = [UNKNOWN_PACK, EB_L1M7FLU];
static REFERENCE_PACKS: [BatteryType; 1] = [UNKNOWN_PACK];

pub static BATTERY_EB425161LU: BatteryData = samsung_charging(&EB425161LU_PACKS);

pub static BATTERY_EB535151VU: BatteryData = samsung_charging(&EB535151VU_PACKS);

pub static BATTERY_EB_L1M7FLU: BatteryData = BatteryData {
    temp_high: 45,
    fg_res: 130,
    ..samsung_charging(&EB_L1M7FLU_PACKS)
};

/// Reference board without an id resistor on the pack.
pub static BATTERY_REFERENCE: BatteryData = BatteryData {
    no_maintenance: false,
    chg_unknown_bat: false,
    adc_therm: BatIdMethod::Fixed,
    ..samsung_charging(&REFERENCE_PACKS)
};
