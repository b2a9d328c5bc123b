pub mod tool {

    use serde::Serialize;
    use serde_json::{Map, Value};
    use std::collections::HashMap;
    use std::error::Error;

    /// Function-calling schema for a tool exposed to the model.
    #[derive(Debug, Clone, Serialize)]
    pub struct Tool {
        pub name: String,
        pub description: String,
        pub parameters: HashMap<String, Parameter>,

        pub required: Vec<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct Parameter {
        pub items: HashMap<String, String>,
        pub description: String,
    }

    /// A capability the agent runtime can invoke by name with JSON arguments.
    pub trait ToolCall: Send + Sync {
        fn get_json(&self) -> Result<Value, serde_json::Error>;

        fn run(&self, arguments: &str) -> Result<String, Box<dyn Error>>;

        fn name(&self) -> &str;
    }

    impl Tool {
        pub fn get_json(&self) -> Result<Value, serde_json::Error> {
            let mut properties = Map::new();
            for (key, param) in &self.parameters {
                let mut prop = Map::new();
                let param_type = param
                    .items
                    .get("type")
                    .cloned()
                    .unwrap_or_else(|| "string".to_string());
                prop.insert("type".to_string(), Value::String(param_type));
                prop.insert(
                    "description".to_string(),
                    Value::String(param.description.clone()),
                );
                properties.insert(key.clone(), Value::Object(prop));
            }

            let mut parameters_obj = Map::new();
            parameters_obj.insert("type".to_string(), Value::String("object".to_string()));
            parameters_obj.insert("properties".to_string(), Value::Object(properties));
            if !self.required.is_empty() {
                parameters_obj.insert("required".to_string(), serde_json::to_value(&self.required)?);
            }

            let mut function_obj = Map::new();
            function_obj.insert("name".to_string(), Value::String(self.name.clone()));
            function_obj.insert(
                "description".to_string(),
                Value::String(self.description.clone()),
            );
            function_obj.insert("parameters".to_string(), Value::Object(parameters_obj));

            let mut tool_obj = Map::new();
            tool_obj.insert("type".to_string(), Value::String("function".to_string()));
            tool_obj.insert("function".to_string(), Value::Object(function_obj));

            Ok(Value::Object(tool_obj))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        #[test]
        fn test_tool_get_json() {
            let mut parameters = HashMap::new();
            let mut engine_items = HashMap::new();
            engine_items.insert("type".to_string(), "string".to_string());
            parameters.insert(
                "engine".to_string(),
                Parameter {
                    items: engine_items,
                    description: "Search engine to use".to_string(),
                },
            );

            let tool = Tool {
                name: "lookup".to_string(),
                description: "Look something up".to_string(),
                parameters,
                required: vec!["engine".to_string()],
            };

            let json = tool.get_json().unwrap();
            assert_eq!(json["type"], "function");
            let function = &json["function"];
            assert_eq!(function["name"], "lookup");
            assert_eq!(function["description"], "Look something up");
            assert_eq!(function["parameters"]["required"][0], "engine");

            let engine = &function["parameters"]["properties"]["engine"];
            assert_eq!(engine["type"], "string");
            assert_eq!(engine["description"], "Search engine to use");
        }

        #[test]
        fn test_required_omitted_when_empty() {
            let tool = Tool {
                name: "noop".to_string(),
                description: "Does nothing".to_string(),
                parameters: HashMap::new(),
                required: Vec::new(),
            };

            let json = tool.get_json().unwrap();
            assert!(json["function"]["parameters"].get("required").is_none());
        }
    }
}
