//! 설비비 환산, 생산비, 상각, 혼합 가격 계산 모듈 모음.

pub mod blend;
pub mod capex;
pub mod equipment;
pub mod production_cost;

pub use blend::{blend_price, BlendInput, BlendResult};
pub use capex::{amortize, CapexInput, CapexResult};
pub use equipment::{scale_equipment, EquipmentCost, EquipmentCostSet, EquipmentScalingInput};
pub use production_cost::{
    production_cost, CostComponent, CostComponentKind, ProductionCostInput, ProductionCostResult,
};
