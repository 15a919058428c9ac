//! JSON-RPC method handlers

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};

use metra_core::{Family, FormatTemplate, UnitError, MAX_PRECISION};
use metra_units::{AnyQuantity, ConversionContext, Descriptor, Operator, UnitProxy, UnitRegistry};

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const UNIT_ERROR: i32 = -32000;

// JSON-RPC types
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn parse_error(message: impl Into<String>) -> Self {
        RpcResponse {
            jsonrpc: "2.0".to_string(),
            id: None,
            result: None,
            error: Some(RpcError { code: PARSE_ERROR, message: message.into(), data: None }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl From<UnitError> for RpcError {
    fn from(err: UnitError) -> Self {
        RpcError {
            code: UNIT_ERROR,
            message: err.to_string(),
            data: Some(json!({ "code": err.code() })),
        }
    }
}

/// Registry plus the per-connection conversion context
pub struct Session {
    registry: UnitRegistry,
    ctx: ConversionContext,
}

impl Session {
    pub fn new(registry: UnitRegistry, ctx: ConversionContext) -> Self {
        Self { registry, ctx }
    }

    pub fn handle(&mut self, request: &RpcRequest) -> RpcResponse {
        let result = match request.method.as_str() {
            "ping" => Ok(json!({})),
            "units" => self.units(&request.params),
            "describe" => self.describe(&request.params),
            "relations" => self.relations(),
            "convert" => self.convert(&request.params),
            "multiply" => self.compose(&request.params, Operator::Multiply),
            "divide" => self.compose(&request.params, Operator::Divide),
            "format" => self.format(&request.params),
            "set_factor" => self.set_factor(&request.params),
            "check" => self.check(),
            _ => Err(RpcError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {}", request.method),
                data: None,
            }),
        };

        match result {
            Ok(r) => RpcResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id.clone(),
                result: Some(r),
                error: None,
            },
            Err(e) => {
                debug!(method = request.method.as_str(), code = e.code, message = e.message.as_str(), "request failed");
                RpcResponse {
                    jsonrpc: "2.0".to_string(),
                    id: request.id.clone(),
                    result: None,
                    error: Some(e),
                }
            }
        }
    }

    fn descriptor(&self, unit: &dyn UnitProxy) -> Descriptor {
        Descriptor::of(unit, self.ctx.factor(unit))
    }

    fn quantity_json(&self, quantity: &AnyQuantity) -> JsonValue {
        json!({
            "value": quantity.value(),
            "unit": quantity.unit().name(),
            "symbol": quantity.unit().symbols().primary(),
            "text": quantity.format_in(&self.ctx),
        })
    }

    fn quantity(&self, param: &QuantityParam) -> Result<AnyQuantity, RpcError> {
        Ok(self.registry.lookup(&param.unit)?.create(param.value))
    }

    fn units(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: UnitsParams = parse_optional(params)?;
        let units = match params.family {
            Some(name) => {
                let family = Family::from_name(&name).ok_or_else(|| RpcError {
                    code: INVALID_PARAMS,
                    message: format!("unknown family: {}", name),
                    data: None,
                })?;
                self.registry.family(family)
            }
            None => self.registry.units().to_vec(),
        };
        let descriptors: Vec<Descriptor> = units.into_iter().map(|u| self.descriptor(u)).collect();
        Ok(json!({ "units": descriptors }))
    }

    fn describe(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: DescribeParams = parse(params)?;
        let unit = self.registry.lookup(&params.unit)?;
        Ok(json!(self.descriptor(unit)))
    }

    fn relations(&self) -> Result<JsonValue, RpcError> {
        Ok(json!({ "relations": self.registry.relations() }))
    }

    fn convert(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: ConvertParams = parse(params)?;
        let source = self.registry.lookup(&params.from)?.create(params.value);
        let converted = self.registry.convert(&source, &params.to, &self.ctx)?;
        Ok(self.quantity_json(&converted))
    }

    fn compose(&self, params: &Option<JsonValue>, op: Operator) -> Result<JsonValue, RpcError> {
        let params: ComposeParams = parse(params)?;
        let lhs = self.quantity(&params.lhs)?;
        let rhs = self.quantity(&params.rhs)?;
        let result = self.registry.compose(&lhs, op, &rhs, &self.ctx)?;
        Ok(self.quantity_json(&result))
    }

    fn format(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: FormatParams = parse(params)?;
        if let Some(precision) = params.precision.filter(|&p| p > MAX_PRECISION) {
            return Err(invalid_params(format!(
                "precision {} exceeds {}",
                precision, MAX_PRECISION
            )));
        }
        let unit = self.registry.lookup(&params.unit)?;
        let text = match &params.template {
            Some(source) => {
                let template = FormatTemplate::parse(source)?;
                template.render(params.value, unit.symbols().primary(), unit.name(), params.precision)
            }
            None => self
                .ctx
                .template(unit)
                .render(params.value, unit.symbols().primary(), unit.name(), params.precision),
        };
        Ok(json!({ "text": text }))
    }

    fn set_factor(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: SetFactorParams = parse(params)?;
        let unit = self.registry.lookup(&params.unit)?;
        self.ctx.set_factor_for(unit, params.factor)?;
        info!(unit = unit.name(), factor = params.factor, "factor updated");
        Ok(json!({ "unit": unit.name(), "factor": self.ctx.factor(unit) }))
    }

    fn check(&self) -> Result<JsonValue, RpcError> {
        self.registry.validate()?;
        self.ctx.validate(&self.registry)?;
        Ok(json!({
            "ok": true,
            "units": self.registry.len(),
            "relations": self.registry.relations().len(),
        }))
    }
}

// Method parameters
#[derive(Debug, Default, Deserialize)]
struct UnitsParams {
    family: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DescribeParams {
    unit: String,
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    value: f64,
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct QuantityParam {
    value: f64,
    unit: String,
}

#[derive(Debug, Deserialize)]
struct ComposeParams {
    lhs: QuantityParam,
    rhs: QuantityParam,
}

#[derive(Debug, Deserialize)]
struct FormatParams {
    value: f64,
    unit: String,
    template: Option<String>,
    precision: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct SetFactorParams {
    unit: String,
    factor: f64,
}

fn invalid_params(message: String) -> RpcError {
    warn!(%message, "invalid params");
    RpcError { code: INVALID_PARAMS, message, data: None }
}

fn parse<T: DeserializeOwned>(params: &Option<JsonValue>) -> Result<T, RpcError> {
    let params = params
        .clone()
        .ok_or_else(|| invalid_params("Missing params".to_string()))?;
    serde_json::from_value(params).map_err(|e| invalid_params(format!("Invalid params: {}", e)))
}

fn parse_optional<T: DeserializeOwned + Default>(params: &Option<JsonValue>) -> Result<T, RpcError> {
    match params {
        None | Some(JsonValue::Null) => Ok(T::default()),
        Some(_) => parse(params),
    }
}
