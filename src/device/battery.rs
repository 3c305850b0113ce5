// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Battery and charger parameters read by the AB8500 fuel gauge and charge
//! algorithm drivers. Only data lives here.

/// One point of the open-circuit voltage to capacity curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoltageCapacity {
    pub voltage_mv: i32,
    pub capacity: i32,
}

/// NTC resistance (ohm) at a temperature (degC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResTemp {
    pub temp: i32,
    pub resist: i32,
}

/// Battery internal resistance (mohm) at a temperature (degC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatResVsTemp {
    pub temp: i32,
    pub resist: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryTech {
    Unknown,
    LiIon,
    LiPoly,
}

#[derive(Debug)]
pub struct BatteryType {
    pub name: BatteryTech,
    pub model: &'static str,
    /// Battery-id resistor window (ohm) identifying this pack.
    pub resis_high: i32,
    pub resis_low: i32,
    pub charge_full_design: i32,
    pub nominal_voltage: i32,
    pub termination_vol: i32,
    pub termination_curr: i32,
    pub recharge_vol: i32,
    pub normal_cur_lvl: i32,
    pub normal_vol_lvl: i32,
    pub maint_a_cur_lvl: i32,
    pub maint_a_vol_lvl: i32,
    pub maint_a_chg_timer_h: i32,
    pub low_high_cur_lvl: i32,
    pub low_high_vol_lvl: i32,
    /// Ordered by rising temperature.
    pub r_to_t_tbl: &'static [ResTemp],
    /// Ordered by falling voltage.
    pub v_to_cap_tbl: &'static [VoltageCapacity],
    /// Ordered by falling temperature.
    pub batres_tbl: &'static [BatResVsTemp],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatIdMethod {
    /// Measure the pack's id resistor through BatCtrl.
    BatCtrl,
    /// Measure the NTC through an ADC channel.
    BatTemp,
    /// No id, take the first battery type.
    Fixed,
}

#[derive(Debug)]
pub struct BatteryData {
    pub temp_under: i32,
    pub temp_low: i32,
    pub temp_high: i32,
    pub temp_over: i32,
    pub main_safety_tmr_h: i32,
    pub usb_safety_tmr_h: i32,
    pub bkup_bat_v: i32,
    pub bkup_bat_i: i32,
    pub no_maintenance: bool,
    pub chg_unknown_bat: bool,
    pub enable_overshoot: bool,
    /// Fuel gauge sense resistor, in 0.1 mohm.
    pub fg_res: i32,
    pub adc_therm: BatIdMethod,
    pub interval_charging: i32,
    pub interval_not_charging: i32,
    pub bat_type: &'static [BatteryType],
}
