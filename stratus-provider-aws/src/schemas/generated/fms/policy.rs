//! policy schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::FMS::Policy
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::{enum_type, tags_type};
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// IEMap property type
fn ie_map_type() -> AttributeType {
    AttributeType::Struct {
        name: "IEMap".to_string(),
        fields: vec![
            AttributeSchema::new("account", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The account list for the map.")
                .with_provider_name("ACCOUNT"),
            AttributeSchema::new("orgunit", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The organizational unit list for the map.")
                .with_provider_name("ORGUNIT"),
        ],
    }
}

/// NetworkFirewallPolicy property type
fn network_firewall_policy_type() -> AttributeType {
    AttributeType::Struct {
        name: "NetworkFirewallPolicy".to_string(),
        fields: vec![
            AttributeSchema::new("firewall_deployment_model", enum_type(&["CENTRALIZED", "DISTRIBUTED"]))
                .required()
                .with_description("Defines the deployment model to use for the firewall policy. To use a distributed model, set `FirewallDeploymentModel <https://docs.aws.amazon.com/AWS...")
                .with_provider_name("FirewallDeploymentModel"),
        ],
    }
}

/// PolicyOption property type
fn policy_option_type() -> AttributeType {
    AttributeType::Struct {
        name: "PolicyOption".to_string(),
        fields: vec![
            AttributeSchema::new("network_firewall_policy", network_firewall_policy_type())
                .with_description("Defines the deployment model to use for the firewall policy.")
                .with_provider_name("NetworkFirewallPolicy"),
            AttributeSchema::new("third_party_firewall_policy", third_party_firewall_policy_type())
                .with_description("Defines the policy options for a third-party firewall policy.")
                .with_provider_name("ThirdPartyFirewallPolicy"),
        ],
    }
}

/// ResourceTag property type
fn resource_tag_type() -> AttributeType {
    AttributeType::Struct {
        name: "ResourceTag".to_string(),
        fields: vec![
            AttributeSchema::new("key", AttributeType::String)
                .required()
                .with_description("The resource tag key.")
                .with_provider_name("Key"),
            AttributeSchema::new("value", AttributeType::String)
                .with_description("The resource tag value.")
                .with_provider_name("Value"),
        ],
    }
}

/// SecurityServicePolicyData property type
fn security_service_policy_data_type() -> AttributeType {
    AttributeType::Struct {
        name: "SecurityServicePolicyData".to_string(),
        fields: vec![
            AttributeSchema::new("managed_service_data", AttributeType::String)
                .with_description("Details about the service that are specific to the service type, in JSON format. - Example: `DNS_FIREWALL` `\"{\\\"type\\\":\\\"DNS_FIREWALL\\\",\\\"preProcessRu...")
                .with_provider_name("ManagedServiceData"),
            AttributeSchema::new("policy_option", policy_option_type())
                .with_description("Contains the Network Firewall firewall policy options to configure a centralized deployment model.")
                .with_provider_name("PolicyOption"),
            AttributeSchema::new("type", AttributeType::String)
                .required()
                .with_description("The service that the policy is using to protect the resources. This specifies the type of policy that is created, either an AWS WAF policy, a Shield A...")
                .with_provider_name("Type"),
        ],
    }
}

/// ThirdPartyFirewallPolicy property type
fn third_party_firewall_policy_type() -> AttributeType {
    AttributeType::Struct {
        name: "ThirdPartyFirewallPolicy".to_string(),
        fields: vec![
            AttributeSchema::new("firewall_deployment_model", enum_type(&["CENTRALIZED", "DISTRIBUTED"]))
                .required()
                .with_description("Defines the deployment model to use for the third-party firewall policy.")
                .with_provider_name("FirewallDeploymentModel"),
        ],
    }
}

/// Returns the schema for fms.policy (AWS::FMS::Policy)
pub fn fms_policy_schema() -> ResourceSchema {
    ResourceSchema::new("fms.policy", "AWS::FMS::Policy")
        .with_description("An AWS Firewall Manager policy.")
        .attribute(
            AttributeSchema::new("delete_all_policy_resources", AttributeType::Bool)
                .with_description("Used when deleting a policy. If `true` , Firewall Manager performs cleanup according to the policy type. For AWS WAF and Shield Advanced policies, Fir...")
                .with_provider_name("DeleteAllPolicyResources"),
        )
        .attribute(
            AttributeSchema::new("exclude_map", ie_map_type())
                .with_description("Specifies the AWS account IDs and AWS Organizations organizational units (OUs) to exclude from the policy. Specifying an OU is the equivalent of speci...")
                .with_provider_name("ExcludeMap"),
        )
        .attribute(
            AttributeSchema::new("exclude_resource_tags", AttributeType::Bool)
                .required()
                .with_description("Used only when tags are specified in the `ResourceTags` property. If this property is `True` , resources with the specified tags are not in scope of t...")
                .with_provider_name("ExcludeResourceTags"),
        )
        .attribute(
            AttributeSchema::new("include_map", ie_map_type())
                .with_description("Specifies the AWS account IDs and AWS Organizations organizational units (OUs) to include in the policy. Specifying an OU is the equivalent of specify...")
                .with_provider_name("IncludeMap"),
        )
        .attribute(
            AttributeSchema::new("policy_description", AttributeType::String)
                .with_description("The definition of the AWS Network Firewall firewall policy.")
                .with_provider_name("PolicyDescription"),
        )
        .attribute(
            AttributeSchema::new("policy_name", AttributeType::String)
                .required()
                .with_description("The name of the AWS Firewall Manager policy.")
                .with_provider_name("PolicyName"),
        )
        .attribute(
            AttributeSchema::new("remediation_enabled", AttributeType::Bool)
                .required()
                .with_description("Indicates if the policy should be automatically applied to new resources.")
                .with_provider_name("RemediationEnabled"),
        )
        .attribute(
            AttributeSchema::new("resource_set_ids", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The unique identifiers of the resource sets used by the policy.")
                .with_provider_name("ResourceSetIds"),
        )
        .attribute(
            AttributeSchema::new("resource_tags", AttributeType::List(Box::new(resource_tag_type())))
                .with_description("An array of `ResourceTag` objects, used to explicitly include resources in the policy scope or explicitly exclude them. If this isn't set, then tags a...")
                .with_provider_name("ResourceTags"),
        )
        .attribute(
            AttributeSchema::new("resource_type", AttributeType::String)
                .with_description("The type of resource protected by or in scope of the policy. This is in the format shown in the `AWS Resource Types Reference <https://docs.aws.amazon...")
                .with_provider_name("ResourceType"),
        )
        .attribute(
            AttributeSchema::new("resource_type_list", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("An array of `ResourceType` objects. Use this only to specify multiple resource types. To specify a single resource type, use `ResourceType` .")
                .with_provider_name("ResourceTypeList"),
        )
        .attribute(
            AttributeSchema::new("resources_clean_up", AttributeType::Bool)
                .with_description("Indicates whether AWS Firewall Manager should automatically remove protections from resources that leave the policy scope and clean up resources that...")
                .with_provider_name("ResourcesCleanUp"),
        )
        .attribute(
            AttributeSchema::new("security_service_policy_data", security_service_policy_data_type())
                .required()
                .with_description("Details about the security service that is being used to protect the resources. This contains the following settings: - Type - Indicates the service t...")
                .with_provider_name("SecurityServicePolicyData"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("A collection of key:value pairs associated with an AWS resource. The key:value pair can be anything you define. Typically, the tag key represents a ca...")
                .with_provider_name("Tags"),
        )
        .return_attribute("Arn")
        .return_attribute("Id")
}
